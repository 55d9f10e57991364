use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{reveal_class, Direction, HeroSlideshow, Reveal};
use crate::content::{self, featured_services, BENEFITS, HOME_STATS, HOME_VALUES, TESTIMONIALS};
use crate::hooks::use_reveal;
use crate::pages::use_scroll_to_top;
use crate::reveal::RevealOptions;
use crate::Route;

/// Hero offset and fade while it scrolls out of view.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Parallax {
    offset_pct: f64,
    opacity: f64,
}

impl Default for Parallax {
    fn default() -> Self {
        Self { offset_pct: 0.0, opacity: 1.0 }
    }
}

impl Parallax {
    /// The hero sits at the top of the page, so progress is scroll over its height.
    fn at(scroll_y: f64, hero_height: f64) -> Self {
        if hero_height <= 0.0 {
            return Self::default();
        }
        let progress = (scroll_y / hero_height).clamp(0.0, 1.0);
        Self {
            offset_pct: progress * 50.0,
            opacity: (1.0 - progress * 2.0).clamp(0.0, 1.0),
        }
    }

    fn style(&self) -> String {
        format!(
            "transform: translateY({:.1}%); opacity: {:.3};",
            self.offset_pct, self.opacity
        )
    }
}

#[hook]
fn use_hero_parallax(hero: NodeRef) -> Parallax {
    let parallax = use_state_eq(Parallax::default);

    {
        let parallax = parallax.clone();
        use_effect_with_deps(move |hero: &NodeRef| {
            let hero = hero.clone();
            let listener = web_sys::window().map(|window| {
                let scroll_callback = {
                    let window = window.clone();
                    Closure::wrap(Box::new(move || {
                        let Some(element) = hero.cast::<Element>() else {
                            return;
                        };
                        let offset = window.scroll_y().unwrap_or_default();
                        parallax.set(Parallax::at(offset, f64::from(element.client_height())));
                    }) as Box<dyn FnMut()>)
                };

                if let Err(err) = window.add_event_listener_with_callback(
                    "scroll",
                    scroll_callback.as_ref().unchecked_ref(),
                ) {
                    warn!("hero parallax disabled: {:?}", err);
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
        }, hero);
    }

    *parallax
}

#[function_component(Home)]
pub fn home() -> Html {
    use_scroll_to_top();

    let hero_section = use_node_ref();
    let parallax = use_hero_parallax(hero_section.clone());
    let hero = use_node_ref();
    let hero_revealed = use_reveal(hero.clone(), RevealOptions::default());

    html! {
        <div class="home-page">
            <section ref={hero_section} class="hero" style={parallax.style()}>
                <HeroSlideshow />
                <div ref={hero} class={classes!("hero-content", reveal_class(hero_revealed, Direction::Up))}>
                    <h1>
                        {"Building Excellence"}
                        <span class="hero-accent">{"From The Ground Up"}</span>
                    </h1>
                    <p class="hero-subtitle">
                        {"Your trusted partner for residential renovations, commercial construction, and land development in Vancouver and the Lower Mainland."}
                    </p>
                    <div class="hero-actions">
                        <Link<Route> to={Route::Contact} classes="cta-button">
                            {"Get Free Quote"}
                        </Link<Route>>
                        <Link<Route> to={Route::Projects} classes="cta-button outline">
                            {"View Our Work"}
                        </Link<Route>>
                    </div>
                </div>
            </section>

            <section class="section light">
                <div class="section-inner stats-grid">
                    { for HOME_STATS.iter().enumerate().map(|(i, stat)| html! {
                        <Reveal delay_ms={(i as u32) * 100}>
                            <div class="stat">
                                <div class="stat-number">{stat.number}</div>
                                <div class="stat-label">{stat.label}</div>
                            </div>
                        </Reveal>
                    }) }
                </div>
            </section>

            <section class="section light">
                <div class="section-inner">
                    <Reveal class={classes!("section-title")}>
                        <h2>{"Our Services"}</h2>
                        <p>{"From concept to completion, we deliver exceptional construction services tailored to your needs."}</p>
                    </Reveal>
                    <div class="card-grid">
                        { for featured_services().enumerate().map(|(i, service)| html! {
                            <Reveal delay_ms={(i as u32) * 200}>
                                <div class="card service-card">
                                    <div class="service-icon">{service.icon}</div>
                                    <h3>{service.title()}</h3>
                                    <p>{service.summary}</p>
                                    <Link<Route> to={Route::Services} classes="learn-more">
                                        {"Learn More →"}
                                    </Link<Route>>
                                </div>
                            </Reveal>
                        }) }
                    </div>
                </div>
            </section>

            <section class="section dark">
                <div class="section-inner why-grid">
                    <Reveal direction={Direction::Left}>
                        <h2>{format!("Why Choose {}?", content::COMPANY_NAME)}</h2>
                        <p class="why-intro">
                            {"We combine years of experience with a commitment to quality, transparency, and client satisfaction."}
                        </p>
                        <ul class="check-list">
                            { for BENEFITS.iter().map(|benefit| html! { <li>{*benefit}</li> }) }
                        </ul>
                    </Reveal>
                    <div class="values-list">
                        { for HOME_VALUES.iter().enumerate().map(|(i, value)| html! {
                            <Reveal direction={Direction::Right} delay_ms={(i as u32) * 100}>
                                <div class="card">
                                    <h3>{value.title}</h3>
                                    <p>{value.description}</p>
                                </div>
                            </Reveal>
                        }) }
                    </div>
                </div>
            </section>

            <section class="section light">
                <div class="section-inner">
                    <Reveal class={classes!("section-title")}>
                        <h2>{"What Our Clients Say"}</h2>
                    </Reveal>
                    <div class="card-grid">
                        { for TESTIMONIALS.iter().enumerate().map(|(i, t)| html! {
                            <Reveal delay_ms={(i as u32) * 150}>
                                <div class="card testimonial">
                                    <div class="stars">{ ("★".repeat(t.rating as usize)) }</div>
                                    <p class="quote">{format!("\"{}\"", t.quote)}</p>
                                    <div class="author">{t.name}</div>
                                    <div class="author-role">{format!("{} · {}", t.role, t.project)}</div>
                                </div>
                            </Reveal>
                        }) }
                    </div>
                </div>
            </section>

            <section class="section dark cta-section">
                <Reveal class={classes!("section-inner")}>
                    <h2>{"Ready to Start Your Project?"}</h2>
                    <p>
                        {"Contact us today for a free consultation and let's bring your vision to life."}
                    </p>
                    <Link<Route> to={Route::Contact} classes="cta-button">
                        {"Start Your Project Today"}
                    </Link<Route>>
                </Reveal>
            </section>

            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                    color: #fff;
                }
                .hero-content {
                    position: relative;
                    z-index: 5;
                    max-width: 900px;
                    padding: 0 2rem;
                    text-align: center;
                }
                .hero h1 {
                    font-size: 4rem;
                    line-height: 1.1;
                    margin-bottom: 1.5rem;
                }
                .hero-accent {
                    display: block;
                    color: #93c5fd;
                }
                .hero-subtitle {
                    font-size: 1.25rem;
                    color: #cbd5e1;
                    margin-bottom: 2.5rem;
                }
                .hero-actions {
                    display: flex;
                    gap: 1rem;
                    justify-content: center;
                    flex-wrap: wrap;
                }
                .stats-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 2rem;
                    text-align: center;
                }
                .stat-number {
                    font-size: 3rem;
                    font-weight: bold;
                    color: #2563eb;
                }
                .stat-label {
                    color: #475569;
                }
                .service-icon {
                    font-size: 2.5rem;
                    margin-bottom: 1rem;
                }
                .learn-more {
                    color: #2563eb;
                    font-weight: 600;
                    text-decoration: none;
                }
                .why-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                    align-items: center;
                }
                .why-intro {
                    color: #cbd5e1;
                    font-size: 1.125rem;
                }
                .values-list {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .stars {
                    color: #facc15;
                    margin-bottom: 1rem;
                }
                .quote {
                    font-style: italic;
                    color: #475569;
                }
                .author {
                    font-weight: bold;
                    margin-top: 1rem;
                }
                .author-role {
                    color: #64748b;
                    font-size: 0.875rem;
                }
                .cta-section {
                    text-align: center;
                }
                .cta-section p {
                    color: #cbd5e1;
                    font-size: 1.25rem;
                    margin-bottom: 2rem;
                }
                @media (max-width: 768px) {
                    .hero h1 {
                        font-size: 2.5rem;
                    }
                    .stats-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                    .why-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_is_untouched_at_the_top() {
        assert_eq!(Parallax::at(0.0, 800.0), Parallax::default());
    }

    #[test]
    fn hero_fades_out_by_half_its_height() {
        let quarter = Parallax::at(200.0, 800.0);
        assert_eq!(quarter.offset_pct, 12.5);
        assert_eq!(quarter.opacity, 0.5);

        let half = Parallax::at(400.0, 800.0);
        assert_eq!(half.offset_pct, 25.0);
        assert_eq!(half.opacity, 0.0);
    }

    #[test]
    fn offset_stops_once_hero_is_gone() {
        assert_eq!(Parallax::at(5_000.0, 800.0), Parallax { offset_pct: 50.0, opacity: 0.0 });
        assert_eq!(Parallax::at(300.0, 0.0), Parallax::default());
    }

    #[test]
    fn style_writes_transform_and_opacity() {
        assert_eq!(
            Parallax::at(200.0, 800.0).style(),
            "transform: translateY(12.5%); opacity: 0.500;"
        );
    }
}
