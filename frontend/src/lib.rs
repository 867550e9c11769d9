pub mod config;
pub mod content;
pub mod scroll;

pub mod components {
    pub mod cards;
    pub mod carousel;
    pub mod countdown;
    pub mod faq;
    pub mod layout;
}

pub mod pages {
    pub mod landing;
}
