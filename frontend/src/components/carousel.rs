use std::num::NonZeroUsize;
use std::rc::Rc;

use yew::prelude::*;

/// Ordered, non-empty list of externally hosted images.
#[derive(Debug, PartialEq)]
pub struct Gallery {
    label: &'static str,
    images: &'static [&'static str],
    len: NonZeroUsize,
}

impl Gallery {
    /// Panics during constant evaluation when `images` is empty, so an
    /// empty gallery declared as a `static` does not build.
    pub const fn new(label: &'static str, images: &'static [&'static str]) -> Self {
        let len = match NonZeroUsize::new(images.len()) {
            Some(len) => len,
            None => panic!("a gallery needs at least one image"),
        };
        Self { label, images, len }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn images(&self) -> &'static [&'static str] {
        self.images
    }

    pub fn len(&self) -> NonZeroUsize {
        self.len
    }

    pub fn image(&self, index: usize) -> &'static str {
        self.images[index % self.len.get()]
    }

    /// "Amostra 3" style alt text, 1-based.
    pub fn alt_text(&self, index: usize) -> String {
        format!("{} {}", self.label, index + 1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    len: NonZeroUsize,
    current: usize,
}

impl CarouselState {
    pub fn new(len: NonZeroUsize) -> Self {
        Self { len, current: 0 }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn slide_count(&self) -> usize {
        self.len.get()
    }

    pub fn next(self) -> Self {
        Self {
            current: (self.current + 1) % self.slide_count(),
            ..self
        }
    }

    pub fn prev(self) -> Self {
        Self {
            current: (self.current + self.slide_count() - 1) % self.slide_count(),
            ..self
        }
    }

    /// `None` when `index` is past the end.
    pub fn jump(self, index: usize) -> Option<Self> {
        (index < self.slide_count()).then(|| Self {
            current: index,
            ..self
        })
    }
}

pub enum CarouselAction {
    Next,
    Prev,
    Jump(usize),
    /// Back to the first slide of a gallery of `len` images.
    Reset(NonZeroUsize),
}

impl Reducible for CarouselState {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let moved = match action {
            CarouselAction::Next => self.next(),
            CarouselAction::Prev => self.prev(),
            CarouselAction::Reset(len) => CarouselState::new(len),
            CarouselAction::Jump(index) => match self.jump(index) {
                Some(state) => state,
                None => {
                    log::warn!("carousel jump to {} ignored, only {} slides", index, self.slide_count());
                    return self;
                }
            },
        };

        if moved == *self {
            return self;
        }
        log::debug!("carousel at slide {}/{}", moved.current + 1, moved.slide_count());
        Rc::new(moved)
    }
}

#[derive(Properties, PartialEq)]
pub struct CarouselProps {
    pub gallery: &'static Gallery,
}

#[function_component(Carousel)]
pub fn carousel(props: &CarouselProps) -> Html {
    let gallery = props.gallery;
    let state = use_reducer(|| CarouselState::new(gallery.len()));

    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |gallery: &&'static Gallery| {
                dispatcher.dispatch(CarouselAction::Reset(gallery.len()));
                || ()
            },
            gallery,
        );
    }

    // Until the reset lands after a gallery swap, clamp to the new length.
    let current = if state.slide_count() == gallery.len().get() {
        state.current()
    } else {
        0
    };

    let prev = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(CarouselAction::Prev))
    };

    let next = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(CarouselAction::Next))
    };

    html! {
        <div class="carousel">
            <div class="carousel-stage">
                <div class="carousel-frame">
                    <img
                        class="carousel-image"
                        src={gallery.image(current)}
                        alt={gallery.alt_text(current)}
                        referrerpolicy="no-referrer"
                    />
                </div>
                <button class="carousel-nav prev" aria-label="Anterior" onclick={prev}>{"‹"}</button>
                <button class="carousel-nav next" aria-label="Próxima" onclick={next}>{"›"}</button>
            </div>
            <div class="carousel-dots">
                { for (0..gallery.len().get()).map(|index| {
                    let onclick = {
                        let state = state.clone();
                        Callback::from(move |_: MouseEvent| state.dispatch(CarouselAction::Jump(index)))
                    };
                    html! {
                        <button
                            key={index.to_string()}
                            class={classes!("carousel-dot", (index == current).then(|| "active"))}
                            aria-label={format!("Ir para {}", index + 1)}
                            {onclick}
                        />
                    }
                }) }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static FIVE: Gallery = Gallery::new("Amostra", &["a", "b", "c", "d", "e"]);

    fn state(len: usize) -> CarouselState {
        CarouselState::new(NonZeroUsize::new(len).unwrap())
    }

    #[test]
    fn next_wraps_modulo_len() {
        for len in 1..=7 {
            let mut s = state(len);
            for k in 1..=3 * len {
                s = s.next();
                assert_eq!(s.current(), k % len, "len {len}, k {k}");
            }
        }
    }

    #[test]
    fn prev_from_first_goes_to_last() {
        assert_eq!(state(5).prev().current(), 4);
        assert_eq!(state(1).prev().current(), 0);
    }

    #[test]
    fn jump_ignores_history() {
        let wandered = state(5).next().next().prev().next().next().next();
        for i in 0..5 {
            assert_eq!(wandered.jump(i).map(|s| s.current()), Some(i));
            assert_eq!(state(5).jump(i).map(|s| s.current()), Some(i));
        }
    }

    #[test]
    fn jump_past_end_is_rejected() {
        assert_eq!(state(5).jump(5), None);

        let start = Rc::new(state(5));
        let after = Rc::clone(&start).reduce(CarouselAction::Jump(9));
        assert!(Rc::ptr_eq(&start, &after));
    }

    #[test]
    fn reducer_follows_the_same_transitions() {
        let s = Rc::new(state(5))
            .reduce(CarouselAction::Prev)
            .reduce(CarouselAction::Next)
            .reduce(CarouselAction::Next)
            .reduce(CarouselAction::Jump(3));
        assert_eq!(s.current(), 3);
    }

    #[test]
    fn reset_starts_over_with_the_new_length() {
        let on_last = Rc::new(state(5)).reduce(CarouselAction::Jump(4));
        let reset = on_last.reduce(CarouselAction::Reset(NonZeroUsize::new(2).unwrap()));
        assert_eq!(reset.current(), 0);
        assert_eq!(reset.slide_count(), 2);
        assert_eq!(reset.prev().current(), 1);
    }

    #[test]
    fn reset_to_the_same_gallery_keeps_the_state() {
        let start = Rc::new(state(5));
        let after = Rc::clone(&start).reduce(CarouselAction::Reset(NonZeroUsize::new(5).unwrap()));
        assert!(Rc::ptr_eq(&start, &after));
    }

    #[test]
    fn gallery_lookup_and_alt_text() {
        assert_eq!(FIVE.len().get(), 5);
        assert_eq!(FIVE.image(2), "c");
        assert_eq!(FIVE.alt_text(0), "Amostra 1");
        assert_eq!(FIVE.alt_text(4), "Amostra 5");
    }
}
