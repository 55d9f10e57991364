use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::content::{self, SERVICES, SERVICE_AREAS};
use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div class="footer-brand">
                    <Link<Route> to={Route::Home} classes="footer-logo">
                        {content::COMPANY_NAME}
                    </Link<Route>>
                    <p>{"Building excellence from the ground up. Renovation, construction and development across the Lower Mainland."}</p>
                    <p class="footer-areas">{format!("Serving {}", SERVICE_AREAS.join(" · "))}</p>
                </div>
                <div class="footer-column">
                    <h4>{"Company"}</h4>
                    <Link<Route> to={Route::About}>{"About Us"}</Link<Route>>
                    <Link<Route> to={Route::Projects}>{"Our Projects"}</Link<Route>>
                    <Link<Route> to={Route::Contact}>{"Contact"}</Link<Route>>
                </div>
                <div class="footer-column">
                    <h4>{"Services"}</h4>
                    { for SERVICES.iter().map(|service| html! {
                        <Link<Route> to={Route::Services}>{service.title()}</Link<Route>>
                    }) }
                </div>
                <div class="footer-column">
                    <h4>{"Get in Touch"}</h4>
                    <a href={format!("tel:{}", content::PHONE)}>{content::PHONE}</a>
                    <a href={format!("mailto:{}", content::EMAIL)}>{content::EMAIL}</a>
                    <span>{content::LOCATION}</span>
                </div>
            </div>
            <div class="footer-bottom">
                {format!("© {} {}. All rights reserved.", year, content::LEGAL_NAME)}
            </div>
            <style>
                {r#"
                .site-footer {
                    background: #0f172a;
                    color: #94a3b8;
                    padding: 4rem 2rem 2rem;
                }
                .footer-grid {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 2fr 1fr 1fr 1fr;
                    gap: 2rem;
                }
                .footer-logo {
                    font-size: 1.5rem;
                    font-weight: bold;
                    color: #fff;
                    text-decoration: none;
                }
                .footer-areas {
                    font-size: 0.875rem;
                }
                .footer-column {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }
                .footer-column h4 {
                    color: #fff;
                    margin: 0 0 0.5rem;
                }
                .footer-column a {
                    color: #94a3b8;
                    text-decoration: none;
                    transition: color 0.3s;
                }
                .footer-column a:hover {
                    color: #fff;
                }
                .footer-bottom {
                    max-width: 1200px;
                    margin: 3rem auto 0;
                    padding-top: 2rem;
                    border-top: 1px solid #1e293b;
                    text-align: center;
                    font-size: 0.875rem;
                }
                @media (max-width: 768px) {
                    .footer-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </footer>
    }
}
