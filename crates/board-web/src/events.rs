use crate::{dom, input, overlay};
use board_core::{Board, NavKey};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let sx = (x_css / rect.width().max(1.0) as f32) * canvas.width() as f32;
    let sy = (y_css / rect.height().max(1.0) as f32) * canvas.height() as f32;
    Vec2::new(sx, sy)
}

#[inline]
fn nav_key_for(key: &str) -> Option<NavKey> {
    match key {
        "ArrowLeft" | "a" | "A" => Some(NavKey::Left),
        "ArrowRight" | "d" | "D" => Some(NavKey::Right),
        "ArrowUp" | "w" | "W" => Some(NavKey::Up),
        "ArrowDown" | "s" | "S" => Some(NavKey::Down),
        _ => None,
    }
}

pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub board: Rc<RefCell<Board>>,
    pub mouse: Rc<RefCell<input::MouseState>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    // pointermove
    {
        let mouse_m = w.mouse.clone();
        let board_m = w.board.clone();
        let canvas_m = w.canvas.clone();
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
                let pos = pointer_canvas_px(&ev, &canvas_m);
                {
                    let mut ms = mouse_m.borrow_mut();
                    ms.x = pos.x;
                    ms.y = pos.y;
                }
                board_m.borrow_mut().pointer_move(pos);
            }) as Box<dyn FnMut(_)>);
        if let Some(wnd) = web::window() {
            let _ = wnd
                .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }

    // pointerdown
    {
        let mouse_m = w.mouse.clone();
        let board_m = w.board.clone();
        let canvas_m = w.canvas.clone();
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
                let pos = pointer_canvas_px(&ev, &canvas_m);
                {
                    let mut ms = mouse_m.borrow_mut();
                    ms.x = pos.x;
                    ms.y = pos.y;
                }
                board_m.borrow_mut().pointer_down(pos);
                let _ = canvas_m.set_pointer_capture(ev.pointer_id());
                ev.prevent_default();
            }) as Box<dyn FnMut(_)>);
        let _ = w
            .canvas
            .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // pointerup
    {
        let board_m = w.board.clone();
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
                board_m.borrow_mut().pointer_up();
                ev.prevent_default();
            }) as Box<dyn FnMut(_)>);
        if let Some(wnd) = web::window() {
            let _ =
                wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }
}

/// Wheel: vertical delta zooms, horizontal delta scrolls the track.
/// The default action is suppressed so the page never scrolls.
pub fn wire_wheel(canvas: &web::HtmlCanvasElement, board: Rc<RefCell<Board>>) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        board
            .borrow_mut()
            .wheel(ev.delta_x() as f32, ev.delta_y() as f32);
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    let _ = canvas.add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn handle_global_keydown(ev: &web::KeyboardEvent, board: &Rc<RefCell<Board>>) {
    let key = ev.key();
    if let Some(nav) = nav_key_for(&key) {
        board.borrow_mut().key_step(nav);
        if key.starts_with("Arrow") {
            ev.prevent_default();
        }
        return;
    }
    if key == " " {
        board.borrow_mut().reset_view();
        ev.prevent_default();
    }
}

pub fn wire_global_keydown(board: Rc<RefCell<Board>>) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &board);
            }) as Box<dyn FnMut(_)>);
        let _ =
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

// Wire an 'H' key handler to toggle the help panel
pub fn wire_overlay_toggle_h(document: &web::Document) {
    if let Some(window) = web::window() {
        let doc = document.clone();
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                let key = ev.key();
                if key == "h" || key == "H" {
                    overlay::toggle_help(&doc);
                    ev.prevent_default();
                }
            }) as Box<dyn FnMut(_)>);
        let _ =
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Bind the static overlay buttons: help dismissal and the error
/// overlay's manual reload.
pub fn wire_overlay_buttons(document: &web::Document) {
    let doc_help = document.clone();
    dom::add_click_listener(document, "help-close", move || {
        overlay::hide_help(&doc_help);
    });
    dom::add_click_listener(document, "error-reload", move || {
        if let Some(w) = web::window() {
            let _ = w.location().reload();
        }
    });
}
