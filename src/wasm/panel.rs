//! DOM control panel: one range slider per numeric parameter, a checkbox per
//! toggle, and a reset button. Every change writes the shared parameter set
//! back to the URL hash so the current look stays shareable.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, Document, Element, HtmlElement, HtmlImageElement, HtmlInputElement};

use crate::params::{ParameterSet, PARAM_MAX, PARAM_MIN};

type Getter<T> = fn(&ParameterSet) -> T;
type Setter<T> = fn(&mut ParameterSet, T);

/// Build the panel and wire every control to the shared parameter set.
///
/// Also applies the initial overlay visibility and writes the canonical hash
/// once, so a tolerant parse of a degraded link immediately becomes a clean
/// shareable one.
pub fn build(
    document: &Document,
    params: &Rc<RefCell<ParameterSet>>,
    logo: &HtmlImageElement,
) -> Result<(), JsValue> {
    let body = document.body().ok_or("no body")?;
    let panel: HtmlElement = document.create_element("div")?.dyn_into()?;
    panel.set_class_name("panel");
    body.append_child(&panel)?;

    let sliders: [(&str, Getter<u32>, Setter<u32>); 5] = [
        ("zoom", |p| p.zoom, |p, v| p.zoom = v),
        ("thickness", |p| p.thickness, |p, v| p.thickness = v),
        ("aspect", |p| p.aspect, |p, v| p.aspect = v),
        ("textSize", |p| p.text_size, |p, v| p.text_size = v),
        ("separation", |p| p.separation, |p, v| p.separation = v),
    ];

    let mut slider_inputs = Vec::with_capacity(sliders.len());
    for (label, get, set) in sliders {
        let input = slider(document, &panel, label, params, get, set)?;
        slider_inputs.push((input, get));
    }

    let show_logo = checkbox(
        document,
        &panel,
        "showLogo",
        params,
        |p| p.show_logo,
        |p, v| p.show_logo = v,
        {
            let logo = logo.clone();
            move |visible| {
                if let Err(err) = set_logo_visibility(&logo, visible) {
                    log::warn!("logo visibility: {err:?}");
                }
            }
        },
    )?;
    let unicursal = checkbox(
        document,
        &panel,
        "unicursal",
        params,
        |p| p.unicursal,
        |p, v| p.unicursal = v,
        |_| {},
    )?;
    let checkboxes = vec![
        (show_logo, (|p: &ParameterSet| p.show_logo) as Getter<bool>),
        (unicursal, |p: &ParameterSet| p.unicursal),
    ];

    reset_button(document, &panel, params, slider_inputs, checkboxes, logo)?;

    set_logo_visibility(logo, params.borrow().show_logo)?;
    write_hash(&params.borrow())?;
    Ok(())
}

fn slider(
    document: &Document,
    panel: &HtmlElement,
    label: &str,
    params: &Rc<RefCell<ParameterSet>>,
    get: Getter<u32>,
    set: Setter<u32>,
) -> Result<HtmlInputElement, JsValue> {
    let input: HtmlInputElement = document.create_element("input")?.dyn_into()?;
    input.set_type("range");
    input.set_min(&PARAM_MIN.to_string());
    input.set_max(&PARAM_MAX.to_string());
    input.set_step("1");
    input.set_value(&get(&params.borrow()).to_string());
    append_row(document, panel, label, &input)?;

    let handler = {
        let params = params.clone();
        let input = input.clone();
        Closure::wrap(Box::new(move |_: web_sys::Event| {
            if let Ok(value) = input.value().parse::<u32>() {
                set(&mut params.borrow_mut(), value.clamp(PARAM_MIN, PARAM_MAX));
                if let Err(err) = write_hash(&params.borrow()) {
                    log::warn!("hash update failed: {err:?}");
                }
            }
        }) as Box<dyn FnMut(_)>)
    };
    input.add_event_listener_with_callback("input", handler.as_ref().unchecked_ref())?;
    handler.forget();
    Ok(input)
}

fn checkbox(
    document: &Document,
    panel: &HtmlElement,
    label: &str,
    params: &Rc<RefCell<ParameterSet>>,
    get: Getter<bool>,
    set: Setter<bool>,
    after: impl Fn(bool) + 'static,
) -> Result<HtmlInputElement, JsValue> {
    let input: HtmlInputElement = document.create_element("input")?.dyn_into()?;
    input.set_type("checkbox");
    input.set_checked(get(&params.borrow()));
    append_row(document, panel, label, &input)?;

    let handler = {
        let params = params.clone();
        let input = input.clone();
        Closure::wrap(Box::new(move |_: web_sys::Event| {
            let value = input.checked();
            set(&mut params.borrow_mut(), value);
            after(value);
            if let Err(err) = write_hash(&params.borrow()) {
                log::warn!("hash update failed: {err:?}");
            }
        }) as Box<dyn FnMut(_)>)
    };
    input.add_event_listener_with_callback("change", handler.as_ref().unchecked_ref())?;
    handler.forget();
    Ok(input)
}

fn reset_button(
    document: &Document,
    panel: &HtmlElement,
    params: &Rc<RefCell<ParameterSet>>,
    sliders: Vec<(HtmlInputElement, Getter<u32>)>,
    checkboxes: Vec<(HtmlInputElement, Getter<bool>)>,
    logo: &HtmlImageElement,
) -> Result<(), JsValue> {
    let button: HtmlElement = document.create_element("button")?.dyn_into()?;
    button.set_text_content(Some("reset"));
    panel.append_child(&button)?;

    let handler = {
        let params = params.clone();
        let logo = logo.clone();
        Closure::wrap(Box::new(move |_: web_sys::Event| {
            params.borrow_mut().reset();
            let current = *params.borrow();
            for (input, get) in &sliders {
                input.set_value(&get(&current).to_string());
            }
            for (input, get) in &checkboxes {
                input.set_checked(get(&current));
            }
            if let Err(err) = set_logo_visibility(&logo, current.show_logo) {
                log::warn!("logo visibility: {err:?}");
            }
            if let Err(err) = write_hash(&current) {
                log::warn!("hash update failed: {err:?}");
            }
        }) as Box<dyn FnMut(_)>)
    };
    button.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())?;
    handler.forget();
    Ok(())
}

fn append_row(
    document: &Document,
    panel: &HtmlElement,
    label: &str,
    input: &HtmlInputElement,
) -> Result<(), JsValue> {
    let row: Element = document.create_element("label")?;
    let caption = document.create_element("span")?;
    caption.set_text_content(Some(label));
    row.append_child(&caption)?;
    row.append_child(input)?;
    panel.append_child(&row)?;
    Ok(())
}

fn set_logo_visibility(logo: &HtmlImageElement, visible: bool) -> Result<(), JsValue> {
    let value = if visible { "visible" } else { "hidden" };
    logo.style().set_property("visibility", value)
}

fn write_hash(params: &ParameterSet) -> Result<(), JsValue> {
    window()
        .ok_or("no window")?
        .location()
        .set_hash(&params.to_hash())
}
