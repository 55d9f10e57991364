use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{Direction, Reveal};
use crate::content::{self, CORE_VALUES, FUTURE_VISION, LEADERSHIP_PHILOSOPHY, MISSION_VISION};
use crate::pages::{use_scroll_to_top, PageHero};
use crate::Route;

#[function_component(About)]
pub fn about() -> Html {
    use_scroll_to_top();

    html! {
        <div class="about-page">
            <PageHero
                title={format!("About {}", content::COMPANY_NAME)}
                subtitle="Building excellence from the ground up since 2009. We are more than a construction company. We are your partners in creating spaces that inspire."
                image="/images/exterior-1.jpg"
            />

            <section class="section light">
                <div class="section-inner statement-grid">
                    { for MISSION_VISION.iter().enumerate().map(|(i, statement)| html! {
                        <Reveal direction={Direction::alternate(i)}>
                            <div class="card statement-card">
                                <div class="statement-icon">{statement.icon}</div>
                                <h2>{statement.title}</h2>
                                <p class="statement-headline">{statement.headline}</p>
                                <p>{statement.body}</p>
                            </div>
                        </Reveal>
                    }) }
                </div>
            </section>

            <section class="section light">
                <div class="section-inner story-grid">
                    <Reveal direction={Direction::Left}>
                        <h2>{"Our Story"}</h2>
                        <p>
                            {"Founded with a vision to transform the construction industry through innovation and integrity, Aboveground has grown from a small renovation company into one of Vancouver's most trusted construction partners."}
                        </p>
                        <p>
                            {"Our name reflects our commitment to rising above industry standards. Every project we undertake is an opportunity to demonstrate what happens when skilled craftsmanship meets genuine care for our clients."}
                        </p>
                    </Reveal>
                    <Reveal direction={Direction::Right}>
                        <img class="story-image" src="/images/interior-1.jpg" alt="Aboveground team at work" loading="lazy" />
                    </Reveal>
                </div>
            </section>

            <section class="section dark">
                <div class="section-inner">
                    <Reveal class={classes!("section-title")}>
                        <h2>{"Our Core Values"}</h2>
                        <p>{"The principles that guide every decision we make and every project we build."}</p>
                    </Reveal>
                    <div class="card-grid">
                        { for CORE_VALUES.iter().enumerate().map(|(i, value)| html! {
                            <Reveal delay_ms={(i as u32) * 100}>
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
                        <h2>{"Leadership Team"}</h2>
                        <p>{"Experienced professionals driving innovation and excellence in every project."}</p>
                    </Reveal>
                    <Reveal direction={Direction::Fade}>
                        <div class="card philosophy-card">
                            <h3>{"Our Leadership Philosophy"}</h3>
                            <p>{LEADERSHIP_PHILOSOPHY}</p>
                        </div>
                    </Reveal>
                </div>
            </section>

            <section class="section dark">
                <div class="section-inner">
                    <Reveal class={classes!("section-title")}>
                        <h2>{"The Next 50 Years"}</h2>
                        <p>{"Building a legacy that spans continents and generations."}</p>
                    </Reveal>
                    <div class="story-grid">
                        <Reveal direction={Direction::Left} class={classes!("future-copy")}>
                            <h3>{"Global Expansion, Local Excellence"}</h3>
                            { for FUTURE_VISION.iter().map(|paragraph| html! { <p>{*paragraph}</p> }) }
                        </Reveal>
                        <Reveal direction={Direction::Right}>
                            <div class="card journey-card">
                                <h3>{"Ready to Join Our Journey?"}</h3>
                                <p>{"Whether you're planning your dream home renovation or a major commercial project, we're here to turn your vision into reality with the same passion and precision that will carry us into the future."}</p>
                                <Link<Route> to={Route::Contact} classes="cta-button">
                                    {"Start Your Project Today"}
                                </Link<Route>>
                            </div>
                        </Reveal>
                    </div>
                </div>
            </section>

            <style>
                {r#"
                .statement-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 2rem;
                }
                .statement-icon {
                    font-size: 2.5rem;
                }
                .statement-headline {
                    font-size: 1.125rem;
                    font-weight: 600;
                    color: #1e3a8a;
                }
                .story-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                    align-items: center;
                }
                .story-grid p {
                    color: #475569;
                    line-height: 1.7;
                }
                .story-image {
                    width: 100%;
                    border-radius: 16px;
                    box-shadow: 0 20px 40px rgba(15, 23, 42, 0.2);
                }
                .philosophy-card {
                    max-width: 800px;
                    margin: 0 auto;
                    text-align: center;
                }
                .future-copy p {
                    color: #cbd5e1;
                }
                .journey-card {
                    text-align: center;
                }
                @media (max-width: 768px) {
                    .statement-grid,
                    .story-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
