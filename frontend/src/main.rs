use log::info;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

mod chrome;
mod config;
mod contact;
mod content;
mod error;
mod gate;
mod hooks;
mod reveal;
mod subscription;
mod viewport;

mod components {
    pub mod banner;
    pub mod contact_form;
    pub mod hero;
    pub mod projects;
    pub mod stagger;
    pub mod testimonials;
    pub mod vision;
}
mod pages {
    pub mod home;
}

use chrome::MenuState;
use content::NAV_LINKS;
use hooks::use_scrolled;
use pages::home::Home;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        // Single-page site: anything else lands on the home page
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu = use_state(MenuState::default);
    let is_scrolled = use_scrolled();

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu.set(menu.toggle());
        })
    };

    // No prevent_default: the anchor jump itself is the navigation
    let close_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            menu.set(menu.close_on_navigate());
        })
    };

    let links = |class: &'static str| {
        NAV_LINKS
            .iter()
            .map(|link| {
                html! {
                    <a
                        key={link.name}
                        href={link.href}
                        class={class}
                        onclick={close_menu.clone()}
                    >
                        {link.name}
                    </a>
                }
            })
            .collect::<Html>()
    };

    html! {
        <nav class={classes!("top-nav", is_scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="#" class="nav-logo" onclick={close_menu.clone()}>
                    <img src={config::LOGO_MARK} alt={config::BRAND_NAME} />
                </a>

                <div class="nav-links">
                    { links("nav-link") }
                </div>

                <button
                    class={classes!("burger-menu", menu.is_open.then(|| "open"))}
                    onclick={toggle_menu}
                    aria-label="Toggle menu"
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>

            {
                if menu.is_open {
                    html! {
                        <div class="mobile-menu">
                            { links("mobile-link") }
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        background: transparent;
                        border-bottom: 1px solid transparent;
                        transition: all 0.5s ease;
                        animation: nav-enter 0.8s ease-out both;
                    }
                    .top-nav.scrolled {
                        background: rgba(11, 11, 11, 0.95);
                        backdrop-filter: blur(24px);
                        border-bottom-color: rgba(212, 175, 55, 0.1);
                        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.5);
                    }
                    .nav-content {
                        max-width: 80rem;
                        height: 7rem;
                        margin: 0 auto;
                        padding: 0 2.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo img {
                        height: 5rem;
                        width: auto;
                        transition: transform 0.4s ease;
                    }
                    .nav-logo:hover img {
                        transform: scale(1.05);
                    }
                    .nav-links {
                        display: flex;
                        gap: 4rem;
                    }
                    .nav-link,
                    .mobile-link {
                        color: rgba(245, 240, 230, 0.7);
                        font-size: 0.75rem;
                        letter-spacing: 0.3em;
                        text-transform: uppercase;
                        text-decoration: none;
                        font-weight: 300;
                        transition: color 0.4s ease;
                    }
                    .nav-link:hover,
                    .mobile-link:hover {
                        color: #D4AF37;
                    }
                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        justify-content: space-between;
                        width: 1.5rem;
                        height: 1.25rem;
                        padding: 0;
                        background: none;
                        border: none;
                        cursor: pointer;
                    }
                    .burger-menu span {
                        display: block;
                        height: 2px;
                        background: #F5F0E6;
                        transition: all 0.4s ease;
                    }
                    .burger-menu.open span:nth-child(1) { transform: translateY(9px) rotate(45deg); }
                    .burger-menu.open span:nth-child(2) { opacity: 0; }
                    .burger-menu.open span:nth-child(3) { transform: translateY(-9px) rotate(-45deg); }
                    .mobile-menu {
                        display: none;
                        padding: 2rem 2.5rem;
                        border-top: 1px solid rgba(212, 175, 55, 0.1);
                        animation: menu-open 0.4s ease both;
                    }
                    .mobile-link {
                        display: block;
                        padding: 1.25rem 0;
                    }
                    @keyframes nav-enter {
                        from { transform: translateY(-20px); opacity: 0; }
                        to { transform: none; opacity: 1; }
                    }
                    @keyframes menu-open {
                        from { opacity: 0; max-height: 0; }
                        to { opacity: 1; max-height: 30rem; }
                    }
                    @media (max-width: 768px) {
                        .nav-links { display: none; }
                        .burger-menu { display: flex; }
                        .mobile-menu { display: block; }
                    }
                "#}
            </style>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
