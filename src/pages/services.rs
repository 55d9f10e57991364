use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{Direction, Reveal};
use crate::content::{BENEFITS, PROCESS, SERVICES, SERVICE_AREAS};
use crate::pages::{use_scroll_to_top, PageHero};
use crate::Route;

#[function_component(Services)]
pub fn services() -> Html {
    use_scroll_to_top();

    html! {
        <div class="services-page">
            <PageHero
                title="Our Services"
                subtitle="Comprehensive construction solutions tailored to your unique needs. From residential renovations to large-scale developments."
                image="/images/exterior-2.jpg"
            />

            <section class="section light">
                <div class="section-inner service-rows">
                    { for SERVICES.iter().enumerate().map(|(i, service)| {
                        let image_first = i % 2 == 1;
                        html! {
                            <div class={classes!("service-row", image_first.then_some("reversed"))}>
                                <Reveal direction={Direction::alternate(i)}>
                                    <div class="service-icon">{service.icon}</div>
                                    <h2>{service.title()}</h2>
                                    <p class="service-description">{service.description}</p>
                                    <ul class="check-list">
                                        { for service.features.iter().map(|feature| html! { <li>{*feature}</li> }) }
                                    </ul>
                                    <Link<Route> to={Route::Contact} classes="cta-button">
                                        {"Get a Quote"}
                                    </Link<Route>>
                                </Reveal>
                                <Reveal direction={Direction::alternate(i + 1)} delay_ms={150}>
                                    <img
                                        class="service-image"
                                        src={service.image}
                                        alt={service.title()}
                                        loading="lazy"
                                    />
                                </Reveal>
                            </div>
                        }
                    }) }
                </div>
            </section>

            <section class="section dark">
                <div class="section-inner">
                    <Reveal class={classes!("section-title")}>
                        <h2>{"Our Process"}</h2>
                        <p>{"A streamlined approach that ensures quality results and keeps you informed every step of the way."}</p>
                    </Reveal>
                    <div class="card-grid process-grid">
                        { for PROCESS.iter().enumerate().map(|(i, step)| html! {
                            <Reveal delay_ms={(i as u32) * 100}>
                                <div class="process-step">
                                    <div class="process-number">{step.number}</div>
                                    <h3>{step.title}</h3>
                                    <p>{step.description}</p>
                                </div>
                            </Reveal>
                        }) }
                    </div>
                </div>
            </section>

            <section class="section light">
                <div class="section-inner">
                    <Reveal class={classes!("section-title")}>
                        <h2>{"Why Work With Us"}</h2>
                    </Reveal>
                    <div class="card-grid">
                        { for BENEFITS.iter().enumerate().map(|(i, benefit)| html! {
                            <Reveal direction={Direction::Fade} delay_ms={(i as u32) * 100}>
                                <div class="card benefit-card">{*benefit}</div>
                            </Reveal>
                        }) }
                    </div>
                </div>
            </section>

            <section class="section dark">
                <div class="section-inner">
                    <Reveal class={classes!("section-title")}>
                        <h2>{"Service Areas"}</h2>
                        <p>{"Proudly serving the Greater Vancouver Area and surrounding communities."}</p>
                    </Reveal>
                    <div class="area-grid">
                        { for SERVICE_AREAS.iter().enumerate().map(|(i, area)| html! {
                            <Reveal direction={Direction::Fade} delay_ms={(i as u32) * 50}>
                                <div class="area-chip">{*area}</div>
                            </Reveal>
                        }) }
                    </div>
                    <Reveal direction={Direction::Fade} class={classes!("area-note")}>
                        {"Don't see your area listed? "}
                        <Link<Route> to={Route::Contact}>{"Contact us"}</Link<Route>>
                        {" to discuss your project location."}
                    </Reveal>
                </div>
            </section>

            <section class="section light cta-section">
                <Reveal class={classes!("section-inner")}>
                    <h2>{"Transform Your Vision Into Reality"}</h2>
                    <p>{"Ready to start your construction project? Let's discuss how we can bring your ideas to life with our expert services and commitment to excellence."}</p>
                    <div class="cta-buttons">
                        <Link<Route> to={Route::Contact} classes="cta-button">
                            {"Get Your Free Quote"}
                        </Link<Route>>
                        <Link<Route> to={Route::Projects} classes="cta-button outline">
                            {"View Our Projects"}
                        </Link<Route>>
                    </div>
                </Reveal>
            </section>

            <style>
                {r#"
                .service-rows {
                    display: flex;
                    flex-direction: column;
                    gap: 6rem;
                }
                .service-row {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                    align-items: center;
                }
                .service-row.reversed > :first-child {
                    order: 2;
                }
                .service-icon {
                    font-size: 2.5rem;
                }
                .service-description {
                    color: #475569;
                    line-height: 1.7;
                }
                .service-image {
                    width: 100%;
                    height: 400px;
                    object-fit: cover;
                    border-radius: 16px;
                    box-shadow: 0 20px 40px rgba(15, 23, 42, 0.2);
                }
                .process-step {
                    text-align: center;
                }
                .process-step p {
                    color: #94a3b8;
                }
                .process-number {
                    width: 80px;
                    height: 80px;
                    margin: 0 auto 1.5rem;
                    border-radius: 50%;
                    background: #2563eb;
                    color: #fff;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.5rem;
                    font-weight: bold;
                }
                .area-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 1rem;
                }
                .area-chip {
                    padding: 1rem;
                    border: 1px solid #334155;
                    border-radius: 12px;
                    text-align: center;
                    color: #e2e8f0;
                }
                .area-note {
                    margin-top: 2rem;
                    text-align: center;
                    color: #94a3b8;
                }
                .area-note a {
                    color: #93c5fd;
                }
                .cta-section {
                    text-align: center;
                }
                .cta-buttons {
                    display: flex;
                    gap: 1rem;
                    justify-content: center;
                    flex-wrap: wrap;
                }
                .benefit-card {
                    text-align: center;
                    font-weight: 600;
                }
                @media (max-width: 768px) {
                    .service-row {
                        grid-template-columns: 1fr;
                    }
                    .service-row.reversed > :first-child {
                        order: 0;
                    }
                    .area-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }
                "#}
            </style>
        </div>
    }
}
