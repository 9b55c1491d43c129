use gloo::timers::callback::Timeout;
use js_sys::Date;
use web_sys::{HtmlElement, MouseEvent, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use vitrine_core::{CatalogRow, DragScroll, ScrollDirection};

#[derive(Properties, PartialEq)]
pub(crate) struct VideoRowProps {
    pub(crate) row: CatalogRow,
    pub(crate) grace_ms: u32,
    pub(crate) on_redirect: Callback<()>,
}

fn strip_pointer_x(event: &MouseEvent, strip: &HtmlElement) -> f64 {
    (event.page_x() - strip.offset_left()) as f64
}

fn smooth_scroll_to(strip: &HtmlElement, left: f64) {
    let options = ScrollToOptions::new();
    options.set_left(left);
    options.set_behavior(ScrollBehavior::Smooth);
    strip.scroll_to_with_scroll_to_options(&options);
}

#[function_component(VideoRow)]
pub(crate) fn video_row(props: &VideoRowProps) -> Html {
    let strip_ref = use_node_ref();
    let drag = {
        let grace_ms = props.grace_ms;
        use_mut_ref(move || DragScroll::new(grace_ms))
    };
    let settle_timer = use_mut_ref(|| None::<Timeout>);
    let redraw = use_force_update();

    let on_mouse_down = {
        let strip_ref = strip_ref.clone();
        let drag = drag.clone();
        let redraw = redraw.clone();
        Callback::from(move |event: MouseEvent| {
            let Some(strip) = strip_ref.cast::<HtmlElement>() else {
                return;
            };
            let pointer_x = strip_pointer_x(&event, &strip);
            drag.borrow_mut()
                .on_gesture_start(pointer_x, strip.scroll_left() as f64);
            redraw.force_update();
        })
    };

    let on_mouse_move = {
        let strip_ref = strip_ref.clone();
        let drag = drag.clone();
        Callback::from(move |event: MouseEvent| {
            let Some(strip) = strip_ref.cast::<HtmlElement>() else {
                return;
            };
            let pointer_x = strip_pointer_x(&event, &strip);
            let next = drag.borrow_mut().on_gesture_move(pointer_x);
            if let Some(offset) = next {
                event.prevent_default();
                strip.set_scroll_left(offset.round() as i32);
            }
        })
    };

    let on_mouse_up = {
        let drag = drag.clone();
        let settle_timer = settle_timer.clone();
        let redraw = redraw.clone();
        let grace_ms = props.grace_ms;
        Callback::from(move |_: MouseEvent| {
            drag.borrow_mut().on_gesture_end(Date::now());
            redraw.force_update();
            // The click that follows this mouseup is dispatched before the
            // timeout can run.
            let drag = drag.clone();
            let timer = Timeout::new(grace_ms, move || {
                drag.borrow_mut().settle(Date::now());
            });
            *settle_timer.borrow_mut() = Some(timer);
        })
    };

    let on_mouse_leave = {
        let drag = drag.clone();
        let redraw = redraw.clone();
        Callback::from(move |_: MouseEvent| {
            drag.borrow_mut().on_gesture_cancel();
            redraw.force_update();
        })
    };

    let on_activate = {
        let drag = drag.clone();
        let on_redirect = props.on_redirect.clone();
        let title = props.row.title;
        Callback::from(move |event: MouseEvent| {
            if drag.borrow().should_activate(Date::now()) {
                on_redirect.emit(());
            } else {
                event.prevent_default();
                event.stop_propagation();
                gloo::console::log!("row: click swallowed after drag", title);
            }
        })
    };

    let page = |direction: ScrollDirection| {
        let strip_ref = strip_ref.clone();
        let drag = drag.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(strip) = strip_ref.cast::<HtmlElement>() else {
                return;
            };
            let target = drag.borrow().scroll_by(
                direction,
                strip.scroll_left() as f64,
                strip.client_width() as f64,
            );
            smooth_scroll_to(&strip, target);
        })
    };

    let strip_class = classes!("row-strip", drag.borrow().is_dragging().then_some("dragging"));
    let items: Html = props
        .row
        .items
        .iter()
        .enumerate()
        .map(|(index, src)| {
            html! {
                <div key={index} class="row-item" onclick={on_activate.clone()}>
                    <img src={*src} alt={format!("Thumbnail {index}")} loading="lazy" draggable="false" />
                    <div class="row-item-overlay"><span class="play-icon">{"▶"}</span></div>
                    <div class="row-item-badge">{"NOVO"}</div>
                </div>
            }
        })
        .collect();

    html! {
        <section class="row">
            <h2 class="row-title" onclick={on_activate.clone()}>{props.row.title}</h2>
            <div class="row-body">
                <button class="row-arrow row-arrow-left" onclick={page(ScrollDirection::Left)}>{"‹"}</button>
                <div
                    ref={strip_ref.clone()}
                    class={strip_class}
                    onmousedown={on_mouse_down}
                    onmousemove={on_mouse_move}
                    onmouseup={on_mouse_up}
                    onmouseleave={on_mouse_leave}
                >
                    {items}
                </div>
                <button class="row-arrow row-arrow-right" onclick={page(ScrollDirection::Right)}>{"›"}</button>
            </div>
        </section>
    }
}
