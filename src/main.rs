use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, warn};
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod components;
mod config;
mod content;
mod hooks;
mod inquiry;
mod pages;
mod reveal;
mod slideshow;
mod timer;

use components::{Footer, REVEAL_CSS};
use pages::{About, Contact, Home, Projects, Services, PAGE_CSS};

const SCROLLED_OFFSET: f64 = 50.0;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/services")]
    Services,
    #[at("/projects")]
    Projects,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        },
        Route::Services => {
            info!("Rendering Services page");
            html! { <Services /> }
        },
        Route::Projects => {
            info!("Rendering Projects page");
            html! { <Projects /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        },
        Route::NotFound => {
            warn!("Unknown route, rendering Home page");
            html! { <Home /> }
        },
    }
}

const NAV_LINKS: &[(Route, &str)] = &[
    (Route::Home, "Home"),
    (Route::About, "About"),
    (Route::Services, "Services"),
    (Route::Projects, "Projects"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state_eq(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let listener = web_sys::window().map(|window| {
                let scroll_callback = {
                    let window = window.clone();
                    Closure::wrap(Box::new(move || {
                        let offset = window.scroll_y().unwrap_or_default();
                        is_scrolled.set(offset > SCROLLED_OFFSET);
                    }) as Box<dyn FnMut()>)
                };

                if let Err(err) = window.add_event_listener_with_callback(
                    "scroll",
                    scroll_callback.as_ref().unchecked_ref(),
                ) {
                    warn!("could not listen for scroll events: {:?}", err);
                }
                (window, scroll_callback)
            });

            move || {
                if let Some((window, scroll_callback)) = listener {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {content::COMPANY_NAME}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for NAV_LINKS.iter().map(|(route, label)| html! {
                        <div onclick={close_menu.clone()}>
                            <Link<Route> to={route.clone()} classes="nav-link">
                                {*label}
                            </Link<Route>>
                        </div>
                    }) }
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Contact} classes="nav-quote-button">
                            {"Get Quote"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </nav>
    }
}

const NAV_CSS: &str = r#"
* {
    box-sizing: border-box;
}
body {
    margin: 0;
    font-family: 'Inter', system-ui, -apple-system, sans-serif;
    background: #0f172a;
}
.top-nav {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 50;
    padding: 1.5rem 2rem;
    transition: background 0.3s, padding 0.3s, box-shadow 0.3s;
}
.top-nav.scrolled {
    padding: 1rem 2rem;
    background: rgba(15, 23, 42, 0.95);
    box-shadow: 0 4px 20px rgba(0, 0, 0, 0.3);
    backdrop-filter: blur(8px);
}
.nav-content {
    max-width: 1200px;
    margin: 0 auto;
    display: flex;
    align-items: center;
    justify-content: space-between;
}
.nav-logo {
    font-size: 1.75rem;
    font-weight: bold;
    color: #fff;
    text-decoration: none;
}
.nav-right {
    display: flex;
    align-items: center;
    gap: 2rem;
}
.nav-link {
    color: #e2e8f0;
    text-decoration: none;
    transition: color 0.3s;
}
.nav-link:hover {
    color: #93c5fd;
}
.nav-quote-button {
    padding: 0.6rem 1.5rem;
    border-radius: 9999px;
    background: #2563eb;
    color: #fff;
    text-decoration: none;
}
.burger-menu {
    display: none;
    flex-direction: column;
    gap: 5px;
    background: none;
    border: none;
    cursor: pointer;
}
.burger-menu span {
    width: 25px;
    height: 3px;
    background: #fff;
    border-radius: 2px;
}
@media (max-width: 768px) {
    .burger-menu {
        display: flex;
    }
    .nav-right {
        display: none;
        position: absolute;
        top: 100%;
        left: 0;
        right: 0;
        flex-direction: column;
        padding: 2rem;
        background: rgba(15, 23, 42, 0.98);
    }
    .nav-right.mobile-menu-open {
        display: flex;
    }
}
"#;

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <style>{NAV_CSS}{PAGE_CSS}{REVEAL_CSS}</style>
            <Nav />
            <main>
                <Switch<Route> render={switch} />
            </main>
            <Footer />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(err) = console_log::init_with_level(config::log_level()) {
        web_sys::console::error_1(&format!("error initializing log: {}", err).into());
    }

    info!("Starting {}", content::COMPANY_NAME);
    yew::Renderer::<App>::new().render();
}
