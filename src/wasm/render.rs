use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement, Window};

use crate::figure::{self, HueCycle, Point, DEG_360};
use crate::layout;
use crate::params::ParameterSet;

/// Start the render loop: size the canvas, hook the resize listener, and
/// kick off the self-perpetuating animation-frame closure.
pub fn start(
    canvas: HtmlCanvasElement,
    logo: HtmlImageElement,
    params: Rc<RefCell<ParameterSet>>,
) -> Result<(), JsValue> {
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or("2d context not supported")?
        .dyn_into()?;
    ctx.set_line_width(0.1);
    ctx.set_image_smoothing_enabled(true);

    let win = window().ok_or("no window")?;
    fit_canvas(&win, &canvas)?;

    // Re-fit the oversized canvas whenever the viewport changes
    let resize_closure = {
        let canvas = canvas.clone();
        Closure::wrap(Box::new(move || {
            let win = window().unwrap();
            if let Err(err) = fit_canvas(&win, &canvas) {
                log::warn!("resize failed: {err:?}");
            }
        }) as Box<dyn FnMut()>)
    };
    win.add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref())?;
    resize_closure.forget();

    // Animation loop
    // `f` holds the animation-frame closure so that we can keep calling
    // `request_animation_frame` recursively. Storing it inside an `Option`
    // allows us to create the `Closure` first and then obtain a reference to
    // it from within itself.
    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    let mut hue = HueCycle::new();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if let Err(err) = draw_frame(&ctx, &canvas, &logo, &params.borrow(), &hue) {
            log::warn!("frame dropped: {err:?}");
        }
        hue.advance();

        // schedule next
        window()
            .unwrap()
            .request_animation_frame(f.borrow().as_ref().unwrap().as_ref().unchecked_ref())
            .unwrap();
    }) as Box<dyn FnMut()>));

    window()
        .ok_or("no window")?
        .request_animation_frame(g.borrow().as_ref().unwrap().as_ref().unchecked_ref())?;

    Ok(())
}

/// Draw one frame: position the wordmark, clear, then paint every visible
/// beam as a gradient quad with rounded end caps.
fn draw_frame(
    ctx: &CanvasRenderingContext2d,
    canvas: &HtmlCanvasElement,
    logo: &HtmlImageElement,
    params: &ParameterSet,
    hue: &HueCycle,
) -> Result<(), JsValue> {
    let win = window().ok_or("no window")?;
    place_logo(&win, logo, params)?;

    let width = f64::from(canvas.width());
    let height = f64::from(canvas.height());
    ctx.clear_rect(0.0, 0.0, width, height);

    let center = Point::new(width / 2.0, height / 2.0);
    for beam in figure::beams(params, hue, center) {
        let gradient =
            ctx.create_linear_gradient(beam.start.x, beam.start.y, beam.end.x, beam.end.y);
        gradient.add_color_stop(0.0, &figure::hsla(beam.hue_start))?;
        gradient.add_color_stop(1.0, &figure::hsla(beam.hue_end))?;
        ctx.set_fill_style_canvas_gradient(&gradient);

        ctx.begin_path();
        ctx.move_to(beam.quad[0].x, beam.quad[0].y);
        ctx.line_to(beam.quad[1].x, beam.quad[1].y);
        ctx.line_to(beam.quad[2].x, beam.quad[2].y);
        ctx.line_to(beam.quad[3].x, beam.quad[3].y);
        ctx.close_path();
        ctx.fill();

        ctx.begin_path();
        ctx.arc(beam.end.x, beam.end.y, beam.cap_radius, 0.0, DEG_360)?;
        ctx.arc(beam.start.x, beam.start.y, beam.cap_radius, 0.0, DEG_360)?;
        ctx.fill();
    }

    Ok(())
}

/// Scale the wordmark with the figure and center it over the viewport.
fn place_logo(
    win: &Window,
    logo: &HtmlImageElement,
    params: &ParameterSet,
) -> Result<(), JsValue> {
    let viewport_w = win.inner_width()?.as_f64().ok_or("width not a number")?;
    let viewport_h = win.inner_height()?.as_f64().ok_or("height not a number")?;

    let scaled = figure::Scaled::from_params(params);
    let overlay = layout::overlay_layout(
        scaled.radius,
        params.text_size,
        f64::from(logo.width()),
        viewport_w,
        viewport_h,
    );

    let style = logo.style();
    style.set_property("height", &format!("{}px", overlay.height))?;
    style.set_property("top", &format!("{}px", overlay.top))?;
    style.set_property("left", &format!("{}px", overlay.left))?;
    Ok(())
}

/// Oversize the canvas past the viewport and pull it back by the buffer so
/// zooming never reveals a canvas edge.
fn fit_canvas(win: &Window, canvas: &HtmlCanvasElement) -> Result<(), JsValue> {
    let viewport_w = win.inner_width()?.as_f64().ok_or("width not a number")?;
    let viewport_h = win.inner_height()?.as_f64().ok_or("height not a number")?;

    let fit = layout::canvas_layout(viewport_w, viewport_h);
    canvas.set_width(fit.width as u32);
    canvas.set_height(fit.height as u32);

    let style = canvas.style();
    style.set_property("left", &format!("{}px", fit.left))?;
    style.set_property("top", &format!("{}px", fit.top))?;
    Ok(())
}
