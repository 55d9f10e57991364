use yew::prelude::*;

use crate::config;
use crate::hooks::use_slideshow;

/// Background image rotator with indicator dots.
#[function_component(HeroSlideshow)]
pub fn hero_slideshow() -> Html {
    let slideshow = use_slideshow(config::hero_images(), config::SLIDE_PERIOD);

    let Some(images) = slideshow.images() else {
        return html! {
            <div class="hero-slides">
                <img class="hero-slide active" src={config::FALLBACK_HERO_IMAGE} alt="Aboveground construction project" />
                <div class="hero-overlay"></div>
            </div>
        };
    };
    let active = slideshow.active_index();

    html! {
        <>
            <div class="hero-slides">
                { for images.iter().enumerate().map(|(index, image)| html! {
                    <img
                        key={image.src.clone()}
                        class={classes!("hero-slide", (index == active).then_some("active"))}
                        src={image.src.clone()}
                        alt={image.alt.clone()}
                        loading={if index == 0 { "eager" } else { "lazy" }}
                    />
                }) }
                <div class="hero-overlay"></div>
            </div>
            <div class="slide-indicators">
                { for (0..images.len()).map(|index| {
                    let onclick = {
                        let slideshow = slideshow.clone();
                        Callback::from(move |_: MouseEvent| slideshow.select(index))
                    };
                    html! {
                        <button
                            class={classes!("slide-dot", (index == active).then_some("active"))}
                            aria-label={format!("Show slide {}", index + 1)}
                            {onclick}
                        />
                    }
                }) }
            </div>
            <style>
                {r#"
                .hero-slides {
                    position: absolute;
                    inset: 0;
                    overflow: hidden;
                }
                .hero-slide {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    opacity: 0;
                    transform: scale(1.1);
                    transition: opacity 1.5s ease-in-out, transform 1.5s ease-in-out;
                }
                .hero-slide.active {
                    opacity: 1;
                    transform: scale(1.05);
                }
                .hero-overlay {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(135deg, rgba(71, 85, 105, 0.9), rgba(51, 65, 85, 0.85), rgba(30, 41, 59, 0.9));
                }
                .slide-indicators {
                    position: absolute;
                    bottom: 2rem;
                    left: 50%;
                    transform: translateX(-50%);
                    display: flex;
                    gap: 0.5rem;
                    z-index: 10;
                }
                .slide-dot {
                    width: 12px;
                    height: 12px;
                    border: none;
                    border-radius: 50%;
                    background: rgba(148, 163, 184, 0.5);
                    cursor: pointer;
                    transition: background 0.3s;
                }
                .slide-dot.active {
                    background: #fff;
                }
                "#}
            </style>
        </>
    }
}
