use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{reveal_class, stagger, Direction, Reveal};
use crate::content::{Project, ProjectFilter, PROJECTS, PROJECT_STATS};
use crate::hooks::use_reveal;
use crate::pages::{use_scroll_to_top, PageHero};
use crate::reveal::RevealOptions;
use crate::Route;

const PREVIEW_FEATURES: usize = 2;

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    id: u32,
    delay_ms: u32,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone(), RevealOptions::default());

    let Some(project) = PROJECTS.iter().find(|p| p.id == props.id) else {
        return html! {};
    };
    let (features, more) = project.preview_features(PREVIEW_FEATURES);

    html! {
        <div
            ref={node}
            class={classes!("project-card", reveal_class(revealed, Direction::Up))}
            style={stagger(props.delay_ms)}
        >
            <div class="project-image">
                <img src={project.image} alt={project.title} loading="lazy" />
                <span class="project-category">{project.category.label()}</span>
            </div>
            <div class="project-body">
                <h3>{project.title}</h3>
                <p class="project-description">{project.description}</p>
                <div class="project-meta">
                    <span>{format!("📍 {}", project.location)}</span>
                    <span>{format!("🕒 {}", project.duration)}</span>
                    <span>{format!("💰 {}", project.budget)}</span>
                </div>
                <div class="project-features">
                    { for features.iter().map(|f| html! { <span class="feature-tag">{*f}</span> }) }
                    {
                        if more > 0 {
                            html! { <span class="feature-tag more">{format!("+{} more", more)}</span> }
                        } else {
                            html! {}
                        }
                    }
                </div>
            </div>
        </div>
    }
}

#[function_component(Projects)]
pub fn projects() -> Html {
    use_scroll_to_top();
    let filter = use_state(ProjectFilter::default);

    let visible: Vec<&'static Project> = (*filter).apply(PROJECTS).collect();

    html! {
        <div class="projects-page">
            <PageHero
                title="Our Projects"
                subtitle="Explore our portfolio of completed projects showcasing quality craftsmanship and innovative design across residential, commercial, and development sectors."
                image="/images/hero-2.jpg"
            />

            <section class="section light">
                <div class="section-inner">
                    <div class="filter-bar">
                        { for ProjectFilter::options().map(|option| {
                            let onclick = {
                                let filter = filter.clone();
                                Callback::from(move |_: MouseEvent| filter.set(option))
                            };
                            html! {
                                <button
                                    class={classes!("filter-button", (*filter == option).then_some("active"))}
                                    {onclick}
                                >
                                    {option.label()}
                                </button>
                            }
                        }) }
                    </div>
                    <div class="project-grid">
                        { for visible.iter().enumerate().map(|(i, project)| html! {
                            <ProjectCard key={project.id} id={project.id} delay_ms={(i as u32) * 100} />
                        }) }
                    </div>
                </div>
            </section>

            <section class="section dark">
                <div class="section-inner">
                    <Reveal class={classes!("section-title")}>
                        <h2>{"Project Success Metrics"}</h2>
                    </Reveal>
                    <div class="card-grid">
                        { for PROJECT_STATS.iter().enumerate().map(|(i, stat)| html! {
                            <Reveal delay_ms={(i as u32) * 100}>
                                <div class="card metric">
                                    <div class="metric-number">{stat.number}</div>
                                    <h3>{stat.label}</h3>
                                    <p>{stat.description}</p>
                                </div>
                            </Reveal>
                        }) }
                    </div>
                </div>
            </section>

            <section class="section light cta-section">
                <Reveal class={classes!("section-inner")}>
                    <h2>{"Have a Project in Mind?"}</h2>
                    <p>{"Let's discuss how we can bring your vision to life."}</p>
                    <Link<Route> to={Route::Contact} classes="cta-button">
                        {"Start Your Project"}
                    </Link<Route>>
                </Reveal>
            </section>

            <style>
                {r#"
                .filter-bar {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 1rem;
                    margin-bottom: 3rem;
                }
                .filter-button {
                    padding: 0.75rem 1.5rem;
                    border-radius: 9999px;
                    border: 1px solid #cbd5e1;
                    background: #fff;
                    color: #334155;
                    cursor: pointer;
                    transition: background 0.3s, color 0.3s;
                }
                .filter-button.active {
                    background: #2563eb;
                    border-color: #2563eb;
                    color: #fff;
                }
                .project-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(340px, 1fr));
                    gap: 2rem;
                }
                .project-card {
                    background: #fff;
                    border-radius: 16px;
                    overflow: hidden;
                    box-shadow: 0 10px 30px rgba(15, 23, 42, 0.08);
                }
                .project-image {
                    position: relative;
                    height: 220px;
                }
                .project-image img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .project-category {
                    position: absolute;
                    top: 1rem;
                    left: 1rem;
                    padding: 0.25rem 0.75rem;
                    border-radius: 9999px;
                    background: #2563eb;
                    color: #fff;
                    font-size: 0.75rem;
                }
                .project-body {
                    padding: 1.5rem;
                }
                .project-description {
                    color: #475569;
                }
                .project-meta {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                    font-size: 0.875rem;
                    color: #64748b;
                    margin: 1rem 0;
                }
                .project-features {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                }
                .feature-tag {
                    padding: 0.25rem 0.75rem;
                    border-radius: 9999px;
                    background: #eff6ff;
                    color: #1d4ed8;
                    font-size: 0.75rem;
                }
                .feature-tag.more {
                    background: #f1f5f9;
                    color: #475569;
                }
                .metric {
                    text-align: center;
                }
                .metric-number {
                    font-size: 2.5rem;
                    font-weight: bold;
                    color: #93c5fd;
                }
                .cta-section {
                    text-align: center;
                }
                @media (max-width: 768px) {
                    .project-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
