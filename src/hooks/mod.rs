mod use_inquiry;
mod use_reveal;
mod use_slideshow;

pub use use_inquiry::{use_inquiry_form, UseInquiryFormHandle};
pub use use_reveal::{use_reveal, IntersectionSource};
pub use use_slideshow::{use_slideshow, UseSlideshowHandle};
