pub mod about;
pub mod contact;
pub mod home;
pub mod projects;
pub mod services;

pub use about::About;
pub use contact::Contact;
pub use home::Home;
pub use projects::Projects;
pub use services::Services;

use yew::prelude::*;

/// Scroll to the top once when a page mounts.
#[hook]
pub fn use_scroll_to_top() {
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );
}

#[derive(Properties, PartialEq)]
pub struct PageHeroProps {
    pub title: AttrValue,
    pub subtitle: AttrValue,
    pub image: AttrValue,
}

/// Banner shared by the inner pages.
#[function_component(PageHero)]
pub fn page_hero(props: &PageHeroProps) -> Html {
    html! {
        <section class="page-hero" style={format!("background-image: url('{}');", props.image)}>
            <div class="page-hero-overlay"></div>
            <div class="page-hero-content">
                <h1>{props.title.clone()}</h1>
                <p>{props.subtitle.clone()}</p>
            </div>
        </section>
    }
}

pub const PAGE_CSS: &str = r#"
.page-hero {
    position: relative;
    min-height: 60vh;
    display: flex;
    align-items: center;
    justify-content: center;
    background-size: cover;
    background-position: center;
    text-align: center;
    color: #fff;
}
.page-hero-overlay {
    position: absolute;
    inset: 0;
    background: linear-gradient(135deg, rgba(71, 85, 105, 0.9), rgba(30, 41, 59, 0.9));
}
.page-hero-content {
    position: relative;
    max-width: 800px;
    padding: 8rem 2rem 4rem;
}
.page-hero h1 {
    font-size: 3.5rem;
    margin-bottom: 1.5rem;
}
.page-hero p {
    font-size: 1.25rem;
    color: #cbd5e1;
}
.section {
    padding: 6rem 2rem;
}
.section.dark {
    background: #1e293b;
    color: #fff;
}
.section.light {
    background: #f8fafc;
    color: #0f172a;
}
.section-inner {
    max-width: 1200px;
    margin: 0 auto;
}
.section-title {
    text-align: center;
    margin-bottom: 4rem;
}
.section-title h2 {
    font-size: 2.5rem;
    margin-bottom: 1rem;
}
.section-title p {
    font-size: 1.125rem;
    color: #64748b;
    max-width: 700px;
    margin: 0 auto;
}
.card-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
    gap: 2rem;
}
.card {
    background: #fff;
    border-radius: 16px;
    padding: 2rem;
    box-shadow: 0 10px 30px rgba(15, 23, 42, 0.08);
    height: 100%;
    box-sizing: border-box;
}
.dark .card {
    background: rgba(51, 65, 85, 0.5);
    border: 1px solid #334155;
    box-shadow: none;
}
.cta-button {
    display: inline-block;
    padding: 1rem 2rem;
    border-radius: 9999px;
    background: #2563eb;
    color: #fff;
    text-decoration: none;
    font-weight: 600;
    transition: transform 0.3s, background 0.3s;
}
.cta-button:hover {
    background: #1d4ed8;
    transform: scale(1.05);
}
.cta-button.outline {
    background: transparent;
    border: 2px solid #fff;
}
.check-list {
    list-style: none;
    padding: 0;
}
.check-list li::before {
    content: "✓ ";
    color: #22c55e;
    font-weight: bold;
}
@media (max-width: 768px) {
    .page-hero h1 {
        font-size: 2.5rem;
    }
    .section {
        padding: 4rem 1rem;
    }
}
"#;
