pub mod footer;
pub mod hero_slideshow;
pub mod inquiry_form;
pub mod notification;
pub mod reveal;

pub use footer::Footer;
pub use hero_slideshow::HeroSlideshow;
pub use inquiry_form::InquiryForm;
pub use reveal::{reveal_class, stagger, Direction, Reveal, REVEAL_CSS};
