#![cfg(target_arch = "wasm32")]
use board_core::{Board, BoardProfile, PlaneImage};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;
mod texture;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

/// Profile selection is declarative: `<canvas data-profile="draft">`
/// picks the earlier tuning, anything else the refined default.
fn profile_for_canvas(canvas: &web::HtmlCanvasElement) -> BoardProfile {
    match canvas.get_attribute("data-profile").as_deref() {
        Some("draft") => BoardProfile::draft(),
        _ => BoardProfile::refined(),
    }
}

/// Kick off the async image loads for every catalog entry. Generated
/// swatches land on the queue immediately; remote URLs resolve whenever
/// the fetch completes, failures included.
fn queue_catalog_images(
    board: &Rc<RefCell<Board>>,
    pending: &Rc<RefCell<Vec<frame::TextureUpdate>>>,
) {
    let b = board.borrow();
    for (index, desc) in b.catalog.planes.iter().enumerate() {
        match &desc.image {
            PlaneImage::Swatch(s) => {
                pending.borrow_mut().push(frame::TextureUpdate::Loaded {
                    index,
                    width: s.width,
                    height: s.height,
                    pixels: s.pixels.clone(),
                });
            }
            PlaneImage::Remote(url) => {
                let url = url.clone();
                let pending = pending.clone();
                spawn_local(async move {
                    match texture::fetch_rgba(&url).await {
                        Ok((width, height, pixels)) => {
                            pending.borrow_mut().push(frame::TextureUpdate::Loaded {
                                index,
                                width,
                                height,
                                pixels,
                            });
                        }
                        Err(e) => {
                            log::warn!("[texture] {url}: {e:?}");
                            pending
                                .borrow_mut()
                                .push(frame::TextureUpdate::Failed { index });
                        }
                    }
                });
            }
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("board-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id("board-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #board-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    let profile = profile_for_canvas(&canvas);
    let plane_count = profile.plane_count;
    let board = Rc::new(RefCell::new(Board::new(profile)?));
    let mouse = Rc::new(RefCell::new(input::MouseState::default()));
    let pending: Rc<RefCell<Vec<frame::TextureUpdate>>> = Rc::new(RefCell::new(Vec::new()));

    events::wire_overlay_buttons(&document);
    events::wire_overlay_toggle_h(&document);
    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        board: board.clone(),
        mouse: mouse.clone(),
    });
    events::wire_wheel(&canvas, board.clone());
    events::wire_global_keydown(board.clone());

    let gpu = frame::init_gpu(&canvas, plane_count).await;
    if gpu.is_none() {
        board.borrow_mut().mark_fatal();
        overlay::show_error(
            &document,
            "WebGPU is unavailable in this browser. Reload to try again.",
        );
        anyhow::bail!("WebGPU initialization failed");
    }

    queue_catalog_images(&board, &pending);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        board,
        canvas,
        mouse,
        pending_textures: pending,
        gpu,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
