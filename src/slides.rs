//! The fixed, ordered set of slides inside a carousel track.
//!
//! Captured once per initialization and never reordered. Looping is a
//! property of navigation, not of the slide order.

#[cfg(test)]
#[path = "slides_test.rs"]
mod slides_test;

/// One unit of carousel content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    /// Position in document order.
    pub index: usize,
    /// Element id, when the markup assigns one. Used for `aria-controls`.
    pub element_id: Option<String>,
}

/// Ordered slides in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlideSet {
    slides: Vec<Slide>,
}

impl SlideSet {
    /// Build a set from the slides' element ids in document order.
    ///
    /// Empty ids are treated as absent, matching the DOM's `id` property.
    #[must_use]
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        let slides = ids
            .into_iter()
            .enumerate()
            .map(|(index, id)| Slide {
                index,
                element_id: id.map(Into::into).filter(|id: &String| !id.is_empty()),
            })
            .collect();
        Self { slides }
    }

    /// A set of `count` anonymous slides.
    #[must_use]
    pub fn anonymous(count: usize) -> Self {
        Self::from_ids((0..count).map(|_| None::<String>))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// The slide at `index`. Callers wrap first; out of range is `None`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Slide> {
        self.slides.iter()
    }
}
