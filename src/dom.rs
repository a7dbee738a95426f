use crate::constants::{CONTAINER_ID, CURSOR_HIDE_ATTR, SVG_NS};
use crate::style;
use ink_cursor_core::MarkerTransform;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Attach `handler` for `kind` events on `target` for the lifetime of the page.
pub fn add_listener(
    target: &web::EventTarget,
    kind: &str,
    mut handler: impl FnMut(web::Event) + 'static,
) {
    let closure = Closure::wrap(Box::new(move |ev: web::Event| handler(ev)) as Box<dyn FnMut(_)>);
    if let Err(e) =
        target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
    {
        log::warn!("[dom] could not listen for {}: {:?}", kind, e);
    }
    closure.forget();
}

/// The cursor container, created under `<body>` when the page doesn't provide one.
pub fn ensure_container(document: &web::Document) -> anyhow::Result<web::HtmlElement> {
    let el = match document.get_element_by_id(CONTAINER_ID) {
        Some(el) => el,
        None => {
            let el = document
                .create_element("div")
                .map_err(|e| anyhow::anyhow!("create container: {:?}", e))?;
            el.set_id(CONTAINER_ID);
            let body = document.body().ok_or_else(|| anyhow::anyhow!("no body"))?;
            body.append_child(&el)
                .map_err(|e| anyhow::anyhow!("append container: {:?}", e))?;
            el
        }
    };
    _ = el.set_attribute("style", style::CONTAINER_STYLE);
    _ = el.set_attribute("aria-hidden", "true");
    el.dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
}

/// Replace the container's children with `amount` marker spans.
pub fn populate_markers(
    document: &web::Document,
    container: &web::HtmlElement,
    amount: usize,
    width: f32,
) -> anyhow::Result<Vec<web::HtmlElement>> {
    container.set_inner_html("");
    let marker_style = style::marker_style(width);
    let mut spans = Vec::with_capacity(amount);
    for _ in 0..amount {
        let span = document
            .create_element("span")
            .map_err(|e| anyhow::anyhow!("create marker: {:?}", e))?
            .dyn_into::<web::HtmlElement>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        _ = span.set_attribute("style", &marker_style);
        container
            .append_child(&span)
            .map_err(|e| anyhow::anyhow!("append marker: {:?}", e))?;
        spans.push(span);
    }
    Ok(spans)
}

pub fn hide_native_cursor(document: &web::Document) {
    if let Some(el) = document.document_element() {
        if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
            _ = html.style().set_property_with_priority("cursor", "none", "important");
        }
    }
    if let Some(body) = document.body() {
        _ = body.style().set_property_with_priority("cursor", "none", "important");
        let selector = format!("style[{}]", CURSOR_HIDE_ATTR);
        if let Ok(Some(_)) = document.query_selector(&selector) {
            return;
        }
        if let Ok(style_el) = document.create_element("style") {
            _ = style_el.set_attribute(CURSOR_HIDE_ATTR, "true");
            style_el.set_text_content(Some(style::CURSOR_HIDE_CSS));
            _ = body.append_child(&style_el);
        }
    }
}

/// Add the `#goo` SVG filter the container references, unless the page has one.
pub fn inject_goo_filter(document: &web::Document) -> anyhow::Result<()> {
    if document.get_element_by_id(style::GOO_FILTER_ID).is_some() {
        return Ok(());
    }
    let svg = document
        .create_element_ns(Some(SVG_NS), "svg")
        .map_err(|e| anyhow::anyhow!("create goo filter: {:?}", e))?;
    _ = svg.set_attribute("aria-hidden", "true");
    _ = svg.set_attribute("style", style::GOO_SVG_STYLE);
    svg.set_inner_html(style::GOO_FILTER_SVG);
    let body = document.body().ok_or_else(|| anyhow::anyhow!("no body"))?;
    body.append_child(&svg)
        .map_err(|e| anyhow::anyhow!("append goo filter: {:?}", e))?;
    Ok(())
}

pub fn apply_frame(markers: &[web::HtmlElement], frame: &[MarkerTransform]) {
    for (el, t) in markers.iter().zip(frame) {
        _ = el.style().set_property("transform", &style::marker_transform(t));
    }
}

/// Elements matching `selector`, skipping non-element nodes.
pub fn query_elements(root: &web::Document, selector: &str) -> Vec<web::Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        log::warn!("[dom] bad selector {:?}", selector);
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}
