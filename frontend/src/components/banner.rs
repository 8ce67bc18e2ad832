use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;
use crate::content;
use crate::gate::GateState;

/// Full-screen "Under Development" gate shown once per page load.
#[function_component(DevelopmentBanner)]
pub fn development_banner() -> Html {
    let gate = use_state(GateState::default);

    let on_enter = {
        let gate = gate.clone();
        Callback::from(move |_: MouseEvent| {
            if *gate != GateState::Shown {
                return;
            }
            let leaving = gate.enter();
            gate.set(leaving);
            let gate = gate.clone();
            Timeout::new(config::GATE_FADE_MS, move || {
                gate.set(leaving.faded());
            })
            .forget();
        })
    };

    if !gate.is_visible() {
        return html! {};
    }

    html! {
        <div class={classes!("gate", (*gate == GateState::Leaving).then(|| "leaving"))}>
            <div class="gate-panel glass">
                <img src={config::LOGO_MARK} alt={config::BRAND_NAME} class="gate-logo" />
                <div class="short-rule"></div>
                <h2>{content::GATE_TITLE}</h2>
                <p>{content::GATE_BODY}</p>
                <button class="ghost-button" onclick={on_enter}>
                    {"Enter Site"}
                </button>
            </div>
        </div>
    }
}
