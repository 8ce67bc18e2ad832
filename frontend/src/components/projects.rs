use yew::prelude::*;

use crate::components::stagger::StaggerText;
use crate::content;
use crate::hooks::use_reveal;
use crate::reveal::{timings, Split};

#[function_component(Projects)]
pub fn projects() -> Html {
    let section = use_node_ref();
    let revealed = use_reveal(section.clone(), timings::SECTION_TRIGGER);
    let class = classes!("projects", "page-section", revealed.then(|| "revealed"));

    html! {
        <section id="projects" ref={section} class={class}>
            <div class="drift-orb upper-quarter"></div>
            <div class="drift-orb lower-quarter"></div>

            <div class="section-inner centered reveal-rise">
                <span class="eyebrow">{"Portfolio"}</span>
                <h2 class="section-title">
                    <StaggerText
                        text={content::PROJECTS_HEADING}
                        split={Split::Chars}
                        timing={timings::PROJECTS_HEADING}
                    />
                </h2>
                <div class="short-rule reveal-line"></div>
                <p class="lead">{content::PROJECTS_TEASER}</p>
            </div>
        </section>
    }
}
