//! Shared fixtures for the browser tests: the page fragment, DOM helpers and
//! stand-ins for the page globals (`emailjs`, `alert`).

#![allow(dead_code)]

use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, HtmlElement, HtmlInputElement, Window};

pub const PAGE: &str = r##"
<header id="header">
  <div class="nav__menu" id="nav-menu">
    <a href="#home" class="nav__link" id="link-home">Home</a>
    <a href="#pricing" class="nav__link" id="link-pricing">Pricing</a>
    <div id="nav-close">x</div>
  </div>
  <div id="nav-toggle">=</div>
</header>
<section id="home" style="display:block;height:600px;margin:0">home</section>
<section id="pricing" style="display:block;height:600px;margin:0">pricing</section>
<form id="contact-form">
  <input type="email" id="contact-user">
  <button type="submit">Subscribe</button>
</form>
<p id="contact-message"></p>
<a href="#" id="scroll-up">up</a>
"##;

pub fn window() -> Window {
    web_sys::window().unwrap()
}

pub fn mount(markup: &str) -> Document {
    let document = window().document().unwrap();
    document.body().unwrap().set_inner_html(markup);
    document
}

pub fn by_id(document: &Document, id: &str) -> Element {
    document.get_element_by_id(id).unwrap()
}

pub fn click(document: &Document, id: &str) {
    by_id(document, id).dyn_into::<HtmlElement>().unwrap().click();
}

pub fn submit(document: &Document) {
    let event = Event::new("submit").unwrap();
    by_id(document, "contact-form").dispatch_event(&event).unwrap();
}

pub fn contact_input(document: &Document) -> HtmlInputElement {
    by_id(document, "contact-user").dyn_into::<HtmlInputElement>().unwrap()
}

pub fn submit_button(document: &Document) -> Element {
    by_id(document, "contact-form")
        .query_selector("button")
        .unwrap()
        .unwrap()
}

/// Install `window.emailjs = { sendForm }` where `sendForm` runs `body` with
/// the arguments `(service, template, form, key)`. Every call's arguments are
/// recorded in `window.__sendFormCalls`.
pub fn stub_emailjs(body: &str) {
    let window = window();
    Reflect::set(&window, &"__sendFormCalls".into(), &Array::new()).unwrap();
    let send_form = Function::new_with_args(
        "service, template, form, key",
        &format!(
            "window.__sendFormCalls.push([service, template, form, key]);\n{}",
            body
        ),
    );
    let emailjs = Object::new();
    Reflect::set(&emailjs, &"sendForm".into(), &send_form).unwrap();
    Reflect::set(&window, &"emailjs".into(), &emailjs).unwrap();
}

/// `sendForm` that resolves with `{status: 200, text: "OK"}` after `delay_ms`.
pub fn stub_emailjs_resolving(delay_ms: u32) {
    stub_emailjs(&format!(
        "return new Promise(function (resolve) {{ \
           setTimeout(function () {{ resolve({{status: 200, text: 'OK'}}); }}, {}); \
         }});",
        delay_ms
    ));
}

/// `sendForm` that rejects with `{status, text}` after `delay_ms`.
pub fn stub_emailjs_rejecting(delay_ms: u32, status: u16, text: &str) {
    stub_emailjs(&format!(
        "return new Promise(function (_, reject) {{ \
           setTimeout(function () {{ reject({{status: {}, text: {:?}}}); }}, {}); \
         }});",
        status, text, delay_ms
    ));
}

/// Every `sendForm` call recorded by the stub, as `[service, template, form, key]`.
pub fn send_form_calls() -> Vec<Vec<String>> {
    let calls = Reflect::get(&window(), &"__sendFormCalls".into()).unwrap();
    Array::from(&calls)
        .iter()
        .map(|call| {
            Array::from(&call)
                .iter()
                .map(|arg| arg.as_string().unwrap_or_default())
                .collect()
        })
        .collect()
}

/// Replace `window.alert` with a recorder so the relay failure path does not
/// block the test runner.
pub fn capture_alerts() {
    let window = window();
    Reflect::set(&window, &"__alerts".into(), &Array::new()).unwrap();
    let alert = Function::new_with_args("text", "window.__alerts.push(String(text));");
    Reflect::set(&window, &"alert".into(), &alert).unwrap();
}

pub fn alerts() -> Vec<String> {
    let recorded = Reflect::get(&window(), &"__alerts".into()).unwrap_or(JsValue::UNDEFINED);
    Array::from(&recorded)
        .iter()
        .filter_map(|text| text.as_string())
        .collect()
}
