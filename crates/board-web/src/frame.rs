use crate::constants::PICK_RADIUS_FACTOR;
use crate::{dom, input, overlay, render};
use board_core::Board;
use glam::Vec3;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Result of an async image load, applied on the next frame.
pub enum TextureUpdate {
    Loaded {
        index: usize,
        width: u32,
        height: u32,
        pixels: Vec<u8>,
    },
    Failed {
        index: usize,
    },
}

pub struct FrameContext<'a> {
    pub board: Rc<RefCell<Board>>,
    pub canvas: web::HtmlCanvasElement,
    pub mouse: Rc<RefCell<input::MouseState>>,
    pub pending_textures: Rc<RefCell<Vec<TextureUpdate>>>,
    pub gpu: Option<render::GpuState<'a>>,
    pub last_instant: Instant,
}

impl<'a> FrameContext<'a> {
    /// One frame of the render loop. Returns false once the board has hit
    /// its terminal error state and the loop must stop rescheduling.
    pub fn frame(&mut self) -> bool {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;

        let mut board = self.board.borrow_mut();
        if board.state.fatal {
            return false;
        }
        board.tick(dt.as_secs_f32());

        // Apply decoded images / failures queued by the async loaders
        for upd in self.pending_textures.borrow_mut().drain(..) {
            match upd {
                TextureUpdate::Loaded {
                    index,
                    width,
                    height,
                    pixels,
                } => {
                    if let Some(g) = &mut self.gpu {
                        g.set_plane_texture(index, width, height, &pixels);
                    }
                }
                TextureUpdate::Failed { index } => {
                    log::warn!("[texture] plane {index} failed to load; using fallback");
                    board.mark_texture_failed(index);
                }
            }
        }

        let w = self.canvas.width() as f32;
        let h = self.canvas.height() as f32;
        let aspect = w / h.max(1.0);

        // Hover picking against the planes' current animated centers,
        // suspended while a drag-pan is in flight
        if !board.state.drag.active {
            let ms = *self.mouse.borrow();
            let cam = board.camera(aspect);
            let (ro, rd) =
                input::screen_to_world_ray(w, h, ms.x, ms.y, cam.eye, cam.fovy_radians);
            let centers: Vec<Vec3> = (0..board.planes.len())
                .map(|i| board.plane_center(i))
                .collect();
            let radii: Vec<f32> = board
                .catalog
                .planes
                .iter()
                .zip(board.planes.iter())
                .map(|(d, p)| d.scale.x.max(d.scale.y) * p.display_scale * PICK_RADIUS_FACTOR)
                .collect();
            board.set_hovered(input::pick_plane(ro, rd, &centers, &radii));
        }

        if let Some(doc) = dom::window_document() {
            overlay::set_scroll_progress(&doc, board.scroll_progress());
        }

        // Instance data plus a far-to-near draw order for alpha blending
        let count = board.planes.len();
        let mut instances = Vec::with_capacity(count);
        let mut depths = Vec::with_capacity(count);
        for i in 0..count {
            let plane = &board.planes[i];
            instances.push(render::PlaneInstanceRaw::new(
                board.plane_model(i),
                i,
                plane.texture_failed,
                plane.opacity(),
            ));
            depths.push(board.plane_center(i).z);
        }
        let mut order: Vec<usize> = (0..count).collect();
        order.sort_by(|&a, &b| {
            depths[a]
                .partial_cmp(&depths[b])
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let view_proj = board.camera(aspect).view_proj();
        drop(board);

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            match g.render(view_proj, &instances, &order) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Timeout) => {}
                // transient: refresh the surface configuration and retry next frame
                Err(wgpu::SurfaceError::Outdated) => g.reconfigure(),
                Err(e) => {
                    let mut board = self.board.borrow_mut();
                    if board.mark_fatal() {
                        log::error!("render error: {:?}", e);
                        if let Some(doc) = dom::window_document() {
                            overlay::show_error(
                                &doc,
                                "The 3D view was lost. Reload the page to try again.",
                            );
                        }
                    }
                    return false;
                }
            }
        }
        true
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    plane_count: usize,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, plane_count).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !frame_ctx_tick.borrow_mut().frame() {
            // terminal error: drop out of the loop for good
            return;
        }
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
