use yew::prelude::*;

use crate::components::stagger::{delay_style, StaggerText};
use crate::content::{self, TESTIMONIALS};
use crate::hooks::use_reveal;
use crate::reveal::{schedule, timings, Split};

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let section = use_node_ref();
    let revealed = use_reveal(section.clone(), timings::SECTION_TRIGGER);
    let class = classes!("testimonials", "page-section", revealed.then(|| "revealed"));
    let cards = schedule(TESTIMONIALS.iter(), timings::TESTIMONIAL_CARDS);

    html! {
        <section id="testimonials" ref={section} class={class}>
            <div class="edge-line top reveal-line"></div>
            <div class="drift-orb right-third"></div>

            <div class="section-inner">
                <div class="section-header reveal-rise">
                    <span class="eyebrow">{"Testimonials"}</span>
                    <h2 class="section-title">
                        <StaggerText
                            text={content::TESTIMONIALS_HEADING}
                            split={Split::Chars}
                            timing={timings::TESTIMONIALS_HEADING}
                        />
                    </h2>
                    <div class="short-rule reveal-line"></div>
                </div>

                <div class="testimonial-grid">
                    { for cards.into_iter().map(|card| html! {
                        <div
                            key={card.item.id}
                            class="testimonial reveal-item reveal-card"
                            style={delay_style(card.delay)}
                        >
                            <div class="glass testimonial-body">
                                <div class="quote-mark">{"\u{201C}"}</div>
                                <p class="quote">{card.item.quote}</p>
                                <div class="attribution">
                                    <p class="author">{card.item.author}</p>
                                    <p class="author-title">{card.item.title}</p>
                                </div>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
