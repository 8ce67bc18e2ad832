use chrono::Datelike;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::stagger::StaggerText;
use crate::config;
use crate::contact::{dispatch, ContactField, ContactFormDraft, DiagnosticLog};
use crate::content;
use crate::hooks::use_reveal;
use crate::reveal::{timings, Split};

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    /// Receives the draft on submit. Without one the draft is only logged.
    #[prop_or_default]
    pub on_submit: Option<Callback<ContactFormDraft>>,
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    let section = use_node_ref();
    let revealed = use_reveal(section.clone(), timings::SECTION_TRIGGER);
    let class = classes!("contact", "page-section", revealed.then(|| "revealed"));
    let draft = use_state(ContactFormDraft::default);

    let on_input = |field: ContactField| {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(draft.with_field(field, input.value()));
        })
    };

    let on_message = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            draft.set(draft.with_field(ContactField::Message, input.value()));
        })
    };

    let onsubmit = {
        let draft = draft.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            dispatch(on_submit.as_ref(), &DiagnosticLog, &draft);
        })
    };

    let copyright = format!(
        "\u{00A9} {} {}. All rights reserved.",
        chrono::Utc::now().year(),
        config::BRAND_NAME
    );

    html! {
        <footer id="contact" ref={section} class={class}>
            <div class="edge-line top reveal-line"></div>
            <div class="drift-orb left-quarter"></div>
            <div class="drift-orb right-quarter"></div>

            <div class="section-inner">
                <div class="contact-grid">
                    <div class="contact-intro reveal-slide-left">
                        <span class="eyebrow">{"Get in Touch"}</span>
                        <h2 class="section-title">
                            <StaggerText
                                text={content::CONTACT_HEADING}
                                split={Split::Chars}
                                timing={timings::CONTACT_HEADING}
                            />
                        </h2>
                        <div class="short-rule left"></div>
                        <p class="lead">{content::CONTACT_BLURB}</p>
                    </div>

                    <div class="reveal-slide-right" style="transition-delay: 0.2s;">
                        <form class="contact-form" {onsubmit}>
                            <div class="field-row">
                                <div>
                                    <label>{"Name"}</label>
                                    <input
                                        type="text"
                                        class="glass"
                                        placeholder="Your name"
                                        value={draft.name.clone()}
                                        oninput={on_input(ContactField::Name)}
                                    />
                                </div>
                                <div>
                                    <label>{"Email"}</label>
                                    <input
                                        type="email"
                                        class="glass"
                                        placeholder="your@email.com"
                                        value={draft.email.clone()}
                                        oninput={on_input(ContactField::Email)}
                                    />
                                </div>
                            </div>
                            <div>
                                <label>{"Phone"}</label>
                                <input
                                    type="tel"
                                    class="glass"
                                    placeholder="+1 (234) 567-890"
                                    value={draft.phone.clone()}
                                    oninput={on_input(ContactField::Phone)}
                                />
                            </div>
                            <div>
                                <label>{"Message"}</label>
                                <textarea
                                    class="glass"
                                    placeholder="Tell us about your project..."
                                    value={draft.message.clone()}
                                    oninput={on_message}
                                />
                            </div>
                            <button type="submit" class="ghost-button wide">
                                {"Send Message"}
                                <span class="send-arrow">{"\u{2192}"}</span>
                            </button>
                        </form>
                    </div>
                </div>

                <div class="site-footer">
                    <img src={config::LOGO_MARK} alt={config::BRAND_NAME} class="footer-logo" />
                    <p>{copyright}</p>
                </div>
            </div>
        </footer>
    }
}
