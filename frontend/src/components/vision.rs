use yew::prelude::*;

use crate::components::stagger::StaggerText;
use crate::content;
use crate::hooks::use_reveal;
use crate::reveal::{timings, Split};

#[function_component(Vision)]
pub fn vision() -> Html {
    let section = use_node_ref();
    let revealed = use_reveal(section.clone(), timings::SECTION_TRIGGER);
    let class = classes!("vision", "page-section", revealed.then(|| "revealed"));

    html! {
        <section id="vision" ref={section} class={class}>
            <div class="edge-line top reveal-line"></div>
            <div class="edge-line bottom reveal-line"></div>
            <div class="drift-orb upper-left"></div>
            <div class="drift-orb lower-right"></div>

            <div class="section-inner centered">
                <span class="badge reveal-rise">{"Established 2026"}</span>
                <div class="eyebrow muted reveal-rise" style="transition-delay: 0.2s;">
                    {"Our Vision"}
                </div>

                <h2 class="vision-title">
                    <StaggerText
                        text={content::VISION_HEADING_FIRST}
                        split={Split::Chars}
                        timing={timings::VISION_HEADING_FIRST}
                    />
                    <br />
                    <StaggerText
                        text={content::VISION_HEADING_SECOND}
                        split={Split::Chars}
                        timing={timings::VISION_HEADING_SECOND}
                        class={classes!("accent")}
                    />
                </h2>

                <div class="short-rule reveal-line" style="transition-delay: 0.6s;"></div>

                <p class="vision-body">
                    <StaggerText
                        text={content::VISION_BODY_FIRST}
                        split={Split::Words}
                        timing={timings::VISION_BODY_FIRST}
                        class={classes!("blur-in")}
                    />
                    <br class="wide-only" />
                    <StaggerText
                        text={content::VISION_BODY_SECOND}
                        split={Split::Words}
                        timing={timings::VISION_BODY_SECOND}
                        class={classes!("blur-in")}
                    />
                </p>
            </div>
        </section>
    }
}
