use yew::prelude::*;

use crate::hooks::use_reveal;
use crate::reveal::RevealOptions;

/// Where hidden content sits before it animates in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Up,
    Left,
    Right,
    Fade,
}

impl Direction {
    fn class(self) -> &'static str {
        match self {
            Direction::Up => "from-below",
            Direction::Left => "from-left",
            Direction::Right => "from-right",
            Direction::Fade => "from-fade",
        }
    }

    /// Alternating left/right for two-column grids.
    pub fn alternate(index: usize) -> Self {
        if index % 2 == 0 {
            Direction::Left
        } else {
            Direction::Right
        }
    }
}

pub fn reveal_class(revealed: bool, direction: Direction) -> Classes {
    classes!("reveal", direction.class(), revealed.then_some("revealed"))
}

pub fn stagger(delay_ms: u32) -> String {
    format!("transition-delay: {}ms;", delay_ms)
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub direction: Direction,
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub children: Children,
}

/// Wraps its children in a block that animates in the first time it is scrolled into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone(), RevealOptions::default());

    html! {
        <div
            ref={node}
            class={classes!(reveal_class(revealed, props.direction), props.class.clone())}
            style={stagger(props.delay_ms)}
        >
            { for props.children.iter() }
        </div>
    }
}

pub const REVEAL_CSS: &str = r#"
.reveal {
    opacity: 0;
    transition: opacity 0.8s ease-out, transform 0.8s ease-out;
    will-change: opacity, transform;
}
.reveal.from-below { transform: translateY(50px); }
.reveal.from-left { transform: translateX(-50px); }
.reveal.from-right { transform: translateX(50px); }
.reveal.revealed {
    opacity: 1;
    transform: none;
}
"#;
