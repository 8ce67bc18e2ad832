use web_sys::js_sys::Math;
use yew::prelude::*;

use crate::components::stagger::StaggerText;
use crate::config;
use crate::content;
use crate::hooks::use_reveal;
use crate::reveal::{timings, Split};

const PARTICLE_COUNT: usize = 25;

#[derive(Clone, PartialEq)]
struct Particle {
    left: f64,
    top: f64,
    duration: f64,
    delay: f64,
}

impl Particle {
    fn random() -> Self {
        Self {
            left: Math::random() * 100.0,
            top: Math::random() * 100.0,
            duration: 4.0 + Math::random() * 3.0,
            delay: Math::random() * 4.0,
        }
    }

    fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; animation-duration: {:.2}s; animation-delay: {:.2}s;",
            self.left, self.top, self.duration, self.delay
        )
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let section = use_node_ref();
    let revealed = use_reveal(section.clone(), timings::HERO_TRIGGER);
    // Positions are rolled once per mount so re-renders don't shuffle them
    let particles = use_state(|| {
        (0..PARTICLE_COUNT)
            .map(|_| Particle::random())
            .collect::<Vec<_>>()
    });
    let background = format!("background-image: url({});", config::HERO_BACKGROUND);

    html! {
        <section id="home" ref={section} class={classes!("hero", revealed.then(|| "revealed"))}>
            <div class="hero-background" style={background}></div>
            <div class="hero-shade"></div>
            <div class="hero-glow"></div>

            <div class="hero-content">
                <div class="hero-logo reveal-rise">
                    <img src={config::LOGO_MARK} alt={config::BRAND_NAME} />
                </div>
                <div class="hero-divider reveal-line"></div>
                <p class="hero-phrase">
                    <StaggerText
                        text={content::HERO_PHRASE}
                        split={Split::Words}
                        timing={timings::HERO_PHRASE}
                        class={classes!("hero-word")}
                    />
                </p>
            </div>

            <div class="scroll-cue">
                <span>{"Scroll"}</span>
                <div class="scroll-cue-line"></div>
            </div>

            <div class="particles">
                { for particles.iter().map(|particle| html! {
                    <div class="particle" style={particle.style()}></div>
                }) }
            </div>
        </section>
    }
}
