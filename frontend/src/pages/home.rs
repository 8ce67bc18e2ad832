use yew::prelude::*;

use crate::components::{
    banner::DevelopmentBanner,
    contact_form::Contact,
    hero::Hero,
    projects::Projects,
    testimonials::Testimonials,
    vision::Vision,
};
use crate::contact::ContactFormDraft;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    #[prop_or_default]
    pub on_submit: Option<Callback<ContactFormDraft>>,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    html! {
        <div class="landing-page">
            <DevelopmentBanner />
            <Hero />
            <Vision />
            <Testimonials />
            <Projects />
            <Contact on_submit={props.on_submit.clone()} />
            <style>
                {r#"
                    :root {
                        --gold: #D4AF37;
                        --cream: #F5F0E6;
                        --ink: #0B0B0B;
                        --ease-out-expo: cubic-bezier(0.22, 1, 0.36, 1);
                    }
                    html {
                        scroll-behavior: smooth;
                    }
                    body {
                        margin: 0;
                        background: var(--ink);
                        color: var(--cream);
                        font-family: "Inter", -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
                    }
                    .landing-page {
                        min-height: 100vh;
                        background: var(--ink);
                        overflow-x: hidden;
                    }
                    .glass {
                        background: rgba(255, 255, 255, 0.03);
                        backdrop-filter: blur(16px);
                        border: 1px solid rgba(212, 175, 55, 0.12);
                    }
                    .ghost-button {
                        background: transparent;
                        border: 1px solid rgba(212, 175, 55, 0.5);
                        color: var(--gold);
                        padding: 1.6rem 3.5rem;
                        font-size: 0.75rem;
                        letter-spacing: 0.25em;
                        text-transform: uppercase;
                        cursor: pointer;
                        transition: all 0.4s ease;
                    }
                    .ghost-button:hover {
                        background: var(--gold);
                        color: var(--ink);
                    }
                    .ghost-button.wide {
                        width: 100%;
                    }
                    .send-arrow {
                        display: inline-block;
                        margin-left: 1rem;
                        transition: transform 0.4s ease;
                    }
                    .ghost-button:hover .send-arrow {
                        transform: translateX(0.5rem);
                    }

                    /* Reveal choreography: items wait for an ancestor with .revealed */
                    .reveal-item {
                        display: inline-block;
                        opacity: 0;
                        transition-property: opacity, transform, filter;
                        transition-timing-function: var(--ease-out-expo);
                    }
                    .reveal-char {
                        transform: translateY(60px);
                        transition-duration: 0.6s;
                    }
                    .reveal-word {
                        margin-right: 0.5rem;
                        transform: translateY(50px) rotateX(90deg);
                        transition-duration: 1s;
                    }
                    .reveal-word.blur-in {
                        transform: none;
                        filter: blur(10px);
                        transition-duration: 0.8s;
                        transition-timing-function: ease-out;
                    }
                    .reveal-card {
                        display: block;
                        transform: translateY(60px);
                        transition-duration: 0.8s;
                    }
                    .revealed .reveal-item {
                        opacity: 1;
                        transform: none;
                        filter: none;
                    }
                    .reveal-rise {
                        opacity: 0;
                        transform: translateY(50px);
                        transition: opacity 1.2s ease, transform 1.2s ease;
                    }
                    .reveal-slide-left,
                    .reveal-slide-right {
                        opacity: 0;
                        transition: opacity 1s ease, transform 1s ease;
                    }
                    .reveal-slide-left { transform: translateX(-50px); }
                    .reveal-slide-right { transform: translateX(50px); }
                    .reveal-line {
                        transform: scaleX(0);
                        transition: transform 1.8s var(--ease-out-expo);
                    }
                    .revealed .reveal-rise,
                    .revealed .reveal-slide-left,
                    .revealed .reveal-slide-right {
                        opacity: 1;
                        transform: none;
                    }
                    .revealed .reveal-line {
                        transform: scaleX(1);
                    }

                    /* Hero */
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        overflow: hidden;
                    }
                    .hero-background {
                        position: absolute;
                        inset: 0;
                        background-size: cover;
                        background-position: center;
                        animation: breathe 25s ease-in-out infinite;
                    }
                    .hero-shade {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to bottom, rgba(11,11,11,0.8), rgba(11,11,11,0.6), var(--ink));
                    }
                    .hero-glow {
                        position: absolute;
                        inset: 0;
                        background: radial-gradient(ellipse at 30% 50%, rgba(212,175,55,0.06) 0%, transparent 50%);
                        animation: glow-sweep 10s ease-in-out infinite;
                    }
                    .hero-content {
                        position: relative;
                        z-index: 10;
                        max-width: 72rem;
                        padding: 0 2.5rem;
                        text-align: center;
                    }
                    .hero-logo {
                        margin-bottom: 5rem;
                        transition-delay: 0.3s;
                        transition-duration: 1.8s;
                    }
                    .hero-logo img {
                        height: 15rem;
                        width: auto;
                        animation: logo-glow 5s ease-in-out infinite;
                    }
                    .hero-divider {
                        width: 10rem;
                        height: 1px;
                        margin: 0 auto 4rem;
                        background: linear-gradient(to right, transparent, var(--gold), transparent);
                        transition-delay: 1.2s;
                    }
                    .hero-phrase {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        gap: 0 1rem;
                        color: rgba(245, 240, 230, 0.8);
                        font-size: 1.25rem;
                        letter-spacing: 0.4em;
                        text-transform: uppercase;
                        font-weight: 300;
                        perspective: 600px;
                    }
                    .scroll-cue {
                        position: absolute;
                        bottom: 5rem;
                        left: 50%;
                        transform: translateX(-50%);
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 1rem;
                        opacity: 0;
                        animation: fade-in 1s ease 2.2s forwards;
                    }
                    .scroll-cue span {
                        color: rgba(245, 240, 230, 0.3);
                        font-size: 0.75rem;
                        letter-spacing: 0.4em;
                        text-transform: uppercase;
                    }
                    .scroll-cue-line {
                        width: 1px;
                        height: 4rem;
                        background: linear-gradient(to bottom, rgba(212,175,55,0.4), transparent);
                        animation: cue-pulse 2.5s ease-in-out infinite;
                    }
                    .particles {
                        position: absolute;
                        inset: 0;
                        overflow: hidden;
                        pointer-events: none;
                    }
                    .particle {
                        position: absolute;
                        width: 4px;
                        height: 4px;
                        border-radius: 50%;
                        background: rgba(212, 175, 55, 0.2);
                        opacity: 0;
                        animation-name: twinkle;
                        animation-iteration-count: infinite;
                        animation-timing-function: ease-in-out;
                    }

                    /* Shared section chrome */
                    .page-section {
                        position: relative;
                        padding: 13rem 0;
                        overflow: hidden;
                    }
                    .section-inner {
                        position: relative;
                        z-index: 10;
                        max-width: 72rem;
                        margin: 0 auto;
                        padding: 0 2.5rem;
                    }
                    .section-inner.centered,
                    .section-header {
                        text-align: center;
                    }
                    .section-header {
                        margin-bottom: 6rem;
                    }
                    .edge-line {
                        position: absolute;
                        left: 0;
                        width: 100%;
                        height: 1px;
                        background: linear-gradient(to right, transparent, rgba(212,175,55,0.3), transparent);
                    }
                    .edge-line.top { top: 0; }
                    .edge-line.bottom { bottom: 0; }
                    .drift-orb {
                        position: absolute;
                        width: 500px;
                        height: 500px;
                        border-radius: 50%;
                        opacity: 0.15;
                        background: radial-gradient(circle, rgba(212,175,55,0.12) 0%, transparent 70%);
                        animation: drift 20s ease-in-out infinite;
                    }
                    .drift-orb.upper-left { top: -25%; left: -25%; }
                    .drift-orb.lower-right { bottom: -25%; right: -25%; animation-direction: reverse; }
                    .drift-orb.right-third { top: 33%; right: 0; width: 400px; height: 400px; }
                    .drift-orb.upper-quarter { top: 0; left: 25%; }
                    .drift-orb.lower-quarter { bottom: 0; right: 25%; animation-direction: reverse; }
                    .drift-orb.left-quarter { top: 25%; left: 0; width: 384px; height: 384px; }
                    .drift-orb.right-quarter { bottom: 25%; right: 0; width: 320px; height: 320px; animation-direction: reverse; }
                    .eyebrow {
                        color: var(--gold);
                        font-size: 0.75rem;
                        letter-spacing: 0.5em;
                        text-transform: uppercase;
                        font-weight: 300;
                    }
                    .eyebrow.muted {
                        display: block;
                        margin-bottom: 2rem;
                        color: rgba(245, 240, 230, 0.4);
                    }
                    .badge {
                        display: inline-block;
                        margin-bottom: 3rem;
                        padding: 1rem 2rem;
                        border: 1px solid rgba(212, 175, 55, 0.3);
                        color: var(--gold);
                        font-size: 0.75rem;
                        letter-spacing: 0.5em;
                        text-transform: uppercase;
                    }
                    .section-title,
                    .vision-title {
                        font-family: "Playfair Display", Georgia, serif;
                        font-weight: 400;
                        line-height: 1.15;
                        overflow: hidden;
                    }
                    .section-title {
                        margin-top: 2rem;
                        font-size: 4.5rem;
                    }
                    .vision-title {
                        margin-bottom: 3.5rem;
                        font-size: 6rem;
                        line-height: 1.1;
                    }
                    .accent {
                        color: var(--gold);
                        font-style: italic;
                    }
                    .short-rule {
                        width: 5rem;
                        height: 1px;
                        margin: 3.5rem auto;
                        background: var(--gold);
                    }
                    .short-rule.left {
                        width: 4rem;
                        margin: 0 0 3rem;
                    }
                    .vision-body,
                    .lead {
                        color: rgba(245, 240, 230, 0.55);
                        font-weight: 300;
                        letter-spacing: 0.025em;
                        line-height: 1.7;
                    }
                    .vision-body {
                        max-width: 48rem;
                        margin: 0 auto;
                        font-size: 1.5rem;
                    }
                    .lead {
                        max-width: 42rem;
                        margin: 0 auto;
                        font-size: 1.125rem;
                    }

                    /* Testimonials */
                    .testimonial-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2.5rem;
                    }
                    .testimonial-body {
                        height: 100%;
                        padding: 2.5rem;
                        display: flex;
                        flex-direction: column;
                        transition: border-color 0.4s ease;
                    }
                    .testimonial-body:hover {
                        border-color: rgba(212, 175, 55, 0.3);
                    }
                    .quote-mark {
                        color: var(--gold);
                        font-family: Georgia, serif;
                        font-size: 3rem;
                        opacity: 0.4;
                        margin-bottom: 1.5rem;
                    }
                    .quote {
                        flex-grow: 1;
                        margin-bottom: 2.5rem;
                        color: rgba(245, 240, 230, 0.7);
                        line-height: 1.7;
                        font-weight: 300;
                    }
                    .attribution {
                        border-top: 1px solid rgba(212, 175, 55, 0.1);
                        padding-top: 2rem;
                    }
                    .author {
                        margin: 0;
                        font-weight: 500;
                    }
                    .author-title {
                        margin: 0.25rem 0 0;
                        color: rgba(245, 240, 230, 0.4);
                        font-size: 0.875rem;
                    }

                    /* Contact */
                    .contact {
                        background: linear-gradient(to bottom, var(--ink), #000);
                    }
                    .contact .lead {
                        margin: 0;
                        max-width: 28rem;
                    }
                    .contact-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 10rem;
                    }
                    .contact-form {
                        display: flex;
                        flex-direction: column;
                        gap: 2.5rem;
                    }
                    .field-row {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 2.5rem;
                    }
                    .contact-form label {
                        display: block;
                        margin-bottom: 1.25rem;
                        color: rgba(245, 240, 230, 0.4);
                        font-size: 0.75rem;
                        letter-spacing: 0.25em;
                        text-transform: uppercase;
                    }
                    .contact-form input,
                    .contact-form textarea {
                        width: 100%;
                        box-sizing: border-box;
                        padding: 1.25rem;
                        color: var(--cream);
                        font: inherit;
                        outline: none;
                        transition: border-color 0.4s ease;
                    }
                    .contact-form input { height: 4rem; }
                    .contact-form textarea {
                        min-height: 180px;
                        resize: none;
                    }
                    .contact-form input:focus,
                    .contact-form textarea:focus {
                        border-color: var(--gold);
                    }
                    .site-footer {
                        margin-top: 10rem;
                        padding-top: 4rem;
                        border-top: 1px solid rgba(212, 175, 55, 0.1);
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        color: rgba(245, 240, 230, 0.3);
                        font-size: 0.875rem;
                        letter-spacing: 0.1em;
                    }
                    .footer-logo {
                        height: 3.5rem;
                        opacity: 0.8;
                    }

                    /* Entry gate */
                    .gate {
                        position: fixed;
                        inset: 0;
                        z-index: 100;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: rgba(11, 11, 11, 0.98);
                        backdrop-filter: blur(40px);
                        animation: fade-in 0.4s ease;
                        transition: opacity 0.5s ease;
                    }
                    .gate.leaving {
                        opacity: 0;
                        pointer-events: none;
                    }
                    .gate-panel {
                        max-width: 32rem;
                        margin: 0 2.5rem;
                        padding: 5rem;
                        text-align: center;
                        animation: gate-rise 0.8s var(--ease-out-expo) 0.3s both;
                    }
                    .gate-logo {
                        height: 8rem;
                        margin-bottom: 3.5rem;
                    }
                    .gate-panel h2 {
                        font-family: "Playfair Display", Georgia, serif;
                        font-weight: 400;
                        font-size: 2.25rem;
                        margin-bottom: 2rem;
                    }
                    .gate-panel p {
                        color: rgba(245, 240, 230, 0.5);
                        margin-bottom: 3.5rem;
                        line-height: 1.7;
                    }

                    @keyframes fade-in {
                        from { opacity: 0; }
                        to { opacity: 1; }
                    }
                    @keyframes gate-rise {
                        from { opacity: 0; transform: scale(0.9) translateY(30px); }
                        to { opacity: 1; transform: none; }
                    }
                    @keyframes breathe {
                        0%, 100% { transform: scale(1.1); }
                        50% { transform: scale(1.15); }
                    }
                    @keyframes glow-sweep {
                        0%, 100% { background-position: 0% 50%; opacity: 1; }
                        50% { background-position: 100% 50%; opacity: 0.6; }
                    }
                    @keyframes logo-glow {
                        0%, 100% { filter: drop-shadow(0 0 30px rgba(212, 175, 55, 0)); }
                        50% { filter: drop-shadow(0 0 60px rgba(212, 175, 55, 0.25)); }
                    }
                    @keyframes cue-pulse {
                        0%, 100% { transform: scaleY(1); opacity: 0.4; }
                        50% { transform: scaleY(1.4); opacity: 1; }
                    }
                    @keyframes twinkle {
                        0%, 100% { opacity: 0; transform: scale(0); }
                        50% { opacity: 1; transform: scale(1.5); }
                    }
                    @keyframes drift {
                        0%, 100% { transform: translate(0, 0); }
                        50% { transform: translate(120px, 60px); }
                    }

                    @media (max-width: 950px) {
                        .testimonial-grid,
                        .contact-grid,
                        .field-row {
                            grid-template-columns: 1fr;
                        }
                        .contact-grid { gap: 6rem; }
                        .vision-title { font-size: 3rem; }
                        .section-title { font-size: 2.5rem; }
                        .hero-logo img { height: 12rem; }
                        .hero-phrase { font-size: 1rem; }
                        .wide-only { display: none; }
                        .site-footer {
                            flex-direction: column;
                            gap: 2.5rem;
                        }
                    }
                "#}
            </style>
        </div>
    }
}
