use yew::prelude::*;

use crate::components::{Direction, InquiryForm, Reveal};
use crate::content::{self, AREA_GROUPS, BUSINESS_HOURS, CONTACT_REASONS, FAQS};
use crate::pages::{use_scroll_to_top, PageHero};

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: AttrValue,
    answer: AttrValue,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq-item", (*is_open).then_some("open"))}>
            <button class="faq-question" onclick={toggle} aria-expanded={(*is_open).to_string()}>
                <span>{props.question.clone()}</span>
                <span class="toggle-icon">{if *is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                <p>{props.answer.clone()}</p>
            </div>
        </div>
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    use_scroll_to_top();

    html! {
        <div class="contact-page">
            <PageHero
                title="Get Your Free Quote"
                subtitle="Ready to start your project? Tell us about it and we'll get back to you within 24 hours."
                image="/images/interior-2.jpg"
            />

            <section class="section dark">
                <div class="section-inner contact-grid">
                    <Reveal direction={Direction::Left} class={classes!("form-panel")}>
                        <h2>{"Tell Us About Your Project"}</h2>
                        <InquiryForm />
                    </Reveal>
                    <div class="contact-info">
                        <Reveal direction={Direction::Right}>
                            <div class="card">
                                <h3>{"Contact Information"}</h3>
                                <p>
                                    {"Phone: "}
                                    <a href={format!("tel:{}", content::PHONE)}>{content::PHONE}</a>
                                </p>
                                <p>
                                    {"Email: "}
                                    <a href={format!("mailto:{}", content::EMAIL)}>{content::EMAIL}</a>
                                </p>
                                <p>{format!("Location: {}", content::LOCATION)}</p>
                                <h4>{"Business Hours"}</h4>
                                { for BUSINESS_HOURS.iter().map(|line| html! { <p class="hours">{*line}</p> }) }
                            </div>
                        </Reveal>
                        <Reveal direction={Direction::Right} delay_ms={150}>
                            <div class="card">
                                <h3>{format!("Why Choose {}?", content::COMPANY_NAME)}</h3>
                                <ul class="check-list">
                                    { for CONTACT_REASONS.iter().map(|reason| html! { <li>{*reason}</li> }) }
                                </ul>
                            </div>
                        </Reveal>
                        <Reveal direction={Direction::Right} delay_ms={300}>
                            <div class="card emergency-card">
                                <h3>{"Emergency Services"}</h3>
                                <p>{"Need urgent repairs? We offer 24/7 emergency restoration services."}</p>
                                <a class="cta-button" href={format!("tel:{}", content::EMERGENCY_PHONE)}>
                                    {format!("Call {}", content::EMERGENCY_PHONE)}
                                </a>
                            </div>
                        </Reveal>
                    </div>
                </div>
            </section>

            <section class="section light">
                <div class="section-inner">
                    <Reveal class={classes!("section-title")}>
                        <h2>{"Service Areas"}</h2>
                        <p>{"We proudly serve Vancouver and the surrounding Lower Mainland communities."}</p>
                    </Reveal>
                    <div class="card-grid">
                        { for AREA_GROUPS.iter().enumerate().map(|(i, group)| html! {
                            <Reveal delay_ms={(i as u32) * 150}>
                                <div class="card">
                                    <h3>{group.region}</h3>
                                    <ul class="area-list">
                                        { for group.places.iter().map(|place| html! { <li>{*place}</li> }) }
                                    </ul>
                                </div>
                            </Reveal>
                        }) }
                    </div>
                </div>
            </section>

            <section class="section light">
                <div class="section-inner faq-section">
                    <Reveal class={classes!("section-title")}>
                        <h2>{"Frequently Asked Questions"}</h2>
                    </Reveal>
                    { for FAQS.iter().enumerate().map(|(i, faq)| html! {
                        <Reveal direction={Direction::Fade} delay_ms={(i as u32) * 100}>
                            <FaqItem question={faq.question} answer={faq.answer} />
                        </Reveal>
                    }) }
                </div>
            </section>

            <style>
                {r#"
                .contact-grid {
                    display: grid;
                    grid-template-columns: 3fr 2fr;
                    gap: 3rem;
                    align-items: start;
                }
                .form-panel {
                    background: rgba(30, 41, 59, 0.8);
                    border: 1px solid #334155;
                    border-radius: 16px;
                    padding: 2.5rem;
                }
                .contact-info {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }
                .contact-info a {
                    color: #93c5fd;
                }
                .contact-info .hours {
                    margin: 0.25rem 0;
                    color: #cbd5e1;
                }
                .emergency-card {
                    border-color: rgba(239, 68, 68, 0.5) !important;
                }
                .emergency-card .cta-button {
                    background: #dc2626;
                    color: #fff;
                }
                .area-list {
                    padding-left: 1.25rem;
                    color: #475569;
                }
                .faq-section {
                    max-width: 800px;
                }
                .faq-item {
                    border-bottom: 1px solid #e2e8f0;
                }
                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 1.25rem 0;
                    background: none;
                    border: none;
                    font-size: 1.125rem;
                    font-weight: 600;
                    color: #0f172a;
                    text-align: left;
                    cursor: pointer;
                }
                .toggle-icon {
                    font-size: 1.5rem;
                    color: #2563eb;
                }
                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    color: #475569;
                    transition: max-height 0.3s ease-out;
                }
                .faq-item.open .faq-answer {
                    max-height: 500px;
                }
                @media (max-width: 768px) {
                    .contact-grid {
                        grid-template-columns: 1fr;
                    }
                    .form-panel {
                        padding: 1.5rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
