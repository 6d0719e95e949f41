use std::sync::atomic::{AtomicUsize, Ordering};

use dioxus::dioxus_core::{DynamicNode, TemplateNode};
use dioxus::prelude::*;

use crate::config::{TooltipConfig, UiTimings};
use crate::tooltip::{Timer, TooltipEvent, TooltipMachine};

static NEXT_TOOLTIP_ID: AtomicUsize = AtomicUsize::new(0);

/// Where the content sits relative to the trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Side {
    #[default]
    Top,
    Bottom,
    Left,
    Right,
}

impl Side {
    fn class(self) -> &'static str {
        match self {
            Side::Top => "tooltip-top",
            Side::Bottom => "tooltip-bottom",
            Side::Left => "tooltip-left",
            Side::Right => "tooltip-right",
        }
    }
}

/// Reveals `content` while `trigger` is hovered or focused.
///
/// Timings come from `config`, else from the [`UiTimings`] in context, else
/// from the defaults.
#[component]
pub fn Tooltip(
    trigger: Element,
    content: Element,
    #[props(default)] side: Side,
    #[props(default)] config: Option<TooltipConfig>,
    #[props(default)] default_open: bool,
) -> Element {
    let timings = try_use_context::<UiTimings>().unwrap_or_default();
    let config = config.unwrap_or_else(|| timings.tooltip());
    let has_content = !is_blank(&content);
    let machine = use_signal(move || {
        let machine = if default_open {
            TooltipMachine::open(config)
        } else {
            TooltipMachine::new(config)
        };
        if has_content {
            machine
        } else {
            machine.without_content()
        }
    });
    let id = use_hook(|| {
        format!(
            "tooltip-{}",
            NEXT_TOOLTIP_ID.fetch_add(1, Ordering::Relaxed)
        )
    });
    let visible = has_content && machine.read().is_visible();
    let described_by = visible.then(|| id.clone());

    rsx! {
        span {
            class: "tooltip",
            onkeydown: move |evt: KeyboardEvent| {
                if evt.key() == Key::Escape {
                    drive(machine, TooltipEvent::Dismiss);
                }
            },
            span {
                class: "tooltip-trigger",
                "aria-describedby": described_by,
                onmouseenter: move |_| drive(machine, TooltipEvent::TriggerEnter),
                onmouseleave: move |_| drive(machine, TooltipEvent::TriggerLeave),
                onfocusin: move |_| drive(machine, TooltipEvent::Focus),
                onfocusout: move |_| drive(machine, TooltipEvent::Blur),
                {trigger}
            }
            if visible {
                div {
                    id: "{id}",
                    role: "tooltip",
                    class: "tooltip-content {side.class()}",
                    onmouseenter: move |_| drive(machine, TooltipEvent::ContentEnter),
                    onmouseleave: move |_| drive(machine, TooltipEvent::ContentLeave),
                    {content}
                }
            }
        }
    }
}

/// Feeds one event to the machine and sleeps out any delay it asks for.
fn drive(mut machine: Signal<TooltipMachine>, event: TooltipEvent) {
    let Some(timer) = machine.write().handle(event) else {
        return;
    };
    spawn(async move {
        sleep(timer).await;
        if !machine.write().elapse(timer.generation) {
            tracing::trace!(generation = timer.generation, "tooltip timer superseded");
        }
    });
}

#[cfg(target_arch = "wasm32")]
async fn sleep(timer: Timer) {
    gloo_timers::future::TimeoutFuture::new(timer.delay_millis()).await;
}

// Desktop and mobile renderers run on tokio.
#[cfg(not(target_arch = "wasm32"))]
async fn sleep(timer: Timer) {
    tokio::time::sleep(timer.delay).await;
}

/// True when a slot renders nothing visible, e.g. `rsx! {}` or a failed render.
fn is_blank(slot: &Element) -> bool {
    match slot {
        Ok(node) => node_is_blank(node),
        Err(_) => true,
    }
}

fn node_is_blank(node: &VNode) -> bool {
    node.template.roots.iter().all(|root| match root {
        TemplateNode::Dynamic { id } => match node.dynamic_nodes.get(*id) {
            Some(DynamicNode::Placeholder(_)) | None => true,
            Some(DynamicNode::Text(text)) => text.value.trim().is_empty(),
            Some(DynamicNode::Fragment(children)) => children.iter().all(node_is_blank),
            Some(DynamicNode::Component(_)) => false,
        },
        TemplateNode::Text { text } => text.trim().is_empty(),
        _ => false,
    })
}
