#![allow(dead_code)]

use std::path::{Path, PathBuf};

/// Minimal `Graphene-1.0.gir` with the shape the scanner emits.
pub const GRAPHENE_GIR: &str = r#"<?xml version="1.0"?>
<repository version="1.2" xmlns="http://www.gtk.org/introspection/core/1.0" xmlns:c="http://www.gtk.org/introspection/c/1.0" xmlns:glib="http://www.gtk.org/introspection/glib/1.0">
  <include name="GObject" version="2.0"/>
  <namespace name="Graphene" version="1.0" shared-library="libgraphene-1.0.so.0" c:identifier-prefixes="graphene" c:symbol-prefixes="graphene">
    <constant name="PI" value="3.141593" c:type="GRAPHENE_PI">
      <type name="gfloat" c:type="gfloat"/>
    </constant>
    <record name="Box" c:type="graphene_box_t" glib:type-name="GrapheneBox" glib:get-type="graphene_box_get_type" c:symbol-prefix="box">
      <doc xml:space="preserve">A 3D box, described as the volume between a minimum and a maximum vertices.</doc>
      <constructor name="alloc" c:identifier="graphene_box_alloc">
        <return-value transfer-ownership="full">
          <type name="Box" c:type="graphene_box_t*"/>
        </return-value>
      </constructor>
      <method name="free" c:identifier="graphene_box_free">
        <return-value transfer-ownership="none">
          <type name="none" c:type="void"/>
        </return-value>
      </method>
      <function name="empty" c:identifier="graphene_box_empty">
        <return-value transfer-ownership="none">
          <type name="Box" c:type="const graphene_box_t*"/>
        </return-value>
      </function>
    </record>
    <record name="Point3D" c:type="graphene_point3d_t" glib:type-name="GraphenePoint3D" glib:get-type="graphene_point3d_get_type" c:symbol-prefix="point3d">
      <function name="zero" c:identifier="graphene_point3d_zero"/>
    </record>
    <enumeration name="EulerOrder" c:type="graphene_euler_order_t">
      <member name="default" value="-1" c:identifier="GRAPHENE_EULER_ORDER_DEFAULT"/>
    </enumeration>
  </namespace>
</repository>
"#;

/// `GRAPHENE_GIR` with one SIMD selector leaked as a constant.
pub fn leaky_gir(symbol: &str) -> String {
    GRAPHENE_GIR.replace(
        "    <record name=\"Box\"",
        &format!(
            "    <constant name=\"{symbol}\" value=\"1\" c:type=\"GRAPHENE_{symbol}\">\n      <type name=\"gint\" c:type=\"gint\"/>\n    </constant>\n    <record name=\"Box\""
        ),
    )
}

pub fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("failed to write fixture");
    path
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
