use ink_cursor_core::MarkerTransform;

// Hides the native cursor everywhere while the ink cursor is installed.
pub const CURSOR_HIDE_CSS: &str = "
html, body, * {
  cursor: none !important;
}
input, textarea, [contenteditable=\"true\"] {
  cursor: none !important;
  caret-color: currentColor;
}
";

pub const CONTAINER_STYLE: &str = "position:fixed;top:0;left:0;pointer-events:none;z-index:1000;\
mix-blend-mode:difference;transform-origin:center center;filter:url(\"#goo\");";

pub const GOO_FILTER_ID: &str = "goo";

/// Blur then threshold alpha so overlapping markers merge into one ink blob.
pub const GOO_FILTER_SVG: &str = "<defs><filter id=\"goo\">\
<feGaussianBlur in=\"SourceGraphic\" stdDeviation=\"6\" result=\"blur\" />\
<feColorMatrix in=\"blur\" mode=\"matrix\" \
values=\"1 0 0 0 0  0 1 0 0 0  0 0 1 0 0  0 0 0 35 -15\" result=\"goo\" />\
<feComposite in=\"SourceGraphic\" in2=\"goo\" operator=\"atop\" />\
</filter></defs>";

pub const GOO_SVG_STYLE: &str = "position:absolute;width:0;height:0;overflow:hidden;";

#[inline]
pub fn marker_style(width: f32) -> String {
    format!(
        "position:absolute;display:block;width:{w}px;height:{w}px;border-radius:20px;\
background-color:#fff;transform-origin:center center;will-change:transform;",
        w = width
    )
}

/// CSS transform for one marker; the extra translate centers the span on its point.
#[inline]
pub fn marker_transform(t: &MarkerTransform) -> String {
    format!(
        "translate({:.2}px, {:.2}px) translate(-50%, -50%) scale({:.4}, {:.4})",
        t.x, t.y, t.scale_x, t.scale_y
    )
}
