use log::{debug, warn};
use web_sys::Element;
use yew::prelude::*;

use crate::chrome::{ScrollWatch, WindowScroll};
use crate::reveal::{RevealState, RevealTrigger};
use crate::viewport;

/// Whether the window is scrolled past the nav threshold. Subscribes on
/// mount and unsubscribes on unmount.
#[hook]
pub fn use_scrolled() -> bool {
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let on_change = move |scrolled: bool| is_scrolled.set(scrolled);
                let watch = match ScrollWatch::mount(&WindowScroll, on_change) {
                    Ok(watch) => Some(watch),
                    Err(err) => {
                        warn!("scroll tracking unavailable: {}", err);
                        None
                    }
                };
                move || drop(watch)
            },
            (),
        );
    }

    *is_scrolled
}

/// Latches true once the section's trigger fires: right after mount for
/// `OnLoad`, the first time the referenced element enters the viewport for
/// `InView`.
#[hook]
pub fn use_reveal(node: NodeRef, trigger: RevealTrigger) -> bool {
    let revealed = use_state(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |(node, trigger): &(NodeRef, RevealTrigger)| {
                let subscription = if trigger.fires_on_mount() {
                    revealed.set(true);
                    None
                } else {
                    match node.cast::<Element>() {
                        Some(element) => {
                            let id = element.id();
                            let mut state = RevealState::default();
                            let setter = revealed.clone();
                            let watched = viewport::watch(&element, move |is_intersecting| {
                                let (fired, next) = state.step(is_intersecting);
                                if fired {
                                    debug!("revealing section '{}'", id);
                                    setter.set(true);
                                }
                                next
                            });
                            match watched {
                                Ok(subscription) => Some(subscription),
                                Err(err) => {
                                    warn!("revealing without viewport tracking: {}", err);
                                    revealed.set(true);
                                    None
                                }
                            }
                        }
                        None => {
                            warn!("reveal target not mounted, showing content");
                            revealed.set(true);
                            None
                        }
                    }
                };
                move || drop(subscription)
            },
            (node, trigger),
        );
    }

    *revealed
}
