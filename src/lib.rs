#![cfg_attr(target_arch = "wasm32", allow(dead_code))]

pub mod figure;
pub mod layout;
pub mod params;

// Only compile wasm-specific code when targeting wasm32; the modules above
// are plain math and build everywhere so their tests run on the host.

#[cfg(target_arch = "wasm32")]
mod wasm {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;

    use crate::params::ParameterSet;

    mod panel;
    mod render;

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let canvas = document
            .get_element_by_id("cvs")
            .ok_or("canvas not found")?
            .dyn_into::<web_sys::HtmlCanvasElement>()?;
        let logo = document
            .get_element_by_id("logo")
            .ok_or("logo image not found")?
            .dyn_into::<web_sys::HtmlImageElement>()?;

        let hash = window.location().hash()?;
        let params = Rc::new(RefCell::new(ParameterSet::from_hash(&hash)));
        log::info!("starting with {:?}", params.borrow());

        panel::build(&document, &params, &logo)?;
        render::start(canvas, logo, params)?;
        Ok(())
    }
}

// When compiling for non-wasm targets (e.g., `cargo test` on host),
// provide an empty stub so the crate still builds.
#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
