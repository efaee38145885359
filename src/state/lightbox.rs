//! Lightbox slideshow state.

#[cfg(test)]
#[path = "lightbox_test.rs"]
mod lightbox_test;

pub const DEFAULT_GROUP: &str = "default";

/// One image in a lightbox group.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Slide {
    pub src: String,
    pub caption: String,
}

/// Attributes read from one `a.js-lightbox` trigger.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TriggerLink {
    pub src: Option<String>,
    pub href: Option<String>,
    pub caption: Option<String>,
    pub group: Option<String>,
}

impl TriggerLink {
    /// `data-lightbox-src`, falling back to `href`.
    pub fn slide(&self) -> Slide {
        let src = self.src.clone().filter(|s| !s.is_empty()).or_else(|| self.href.clone()).unwrap_or_default();
        Slide { src, caption: self.caption.clone().unwrap_or_default() }
    }

    pub fn group_id(&self) -> &str {
        self.group.as_deref().filter(|g| !g.is_empty()).unwrap_or(DEFAULT_GROUP)
    }
}

/// Build the slideshow for a click on `links[clicked]`.
///
/// The group is every link sharing the clicked link's group id, in document
/// order; the returned index points at the clicked link within it.
pub fn group_for_click(links: &[TriggerLink], clicked: usize) -> (Vec<Slide>, usize) {
    let Some(target) = links.get(clicked) else {
        return (Vec::new(), 0);
    };
    let group_id = target.group_id();
    let mut slides = Vec::new();
    let mut index = 0;
    for (i, link) in links.iter().enumerate() {
        if link.group_id() != group_id {
            continue;
        }
        if i == clicked {
            index = slides.len();
        }
        slides.push(link.slide());
    }
    (slides, index)
}

/// Overlay state: which group is shown and where in it we are.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LightboxState {
    pub open: bool,
    slides: Vec<Slide>,
    index: usize,
}

impl LightboxState {
    /// Open on `slides[index]`. An out-of-range index starts at the first
    /// slide; an empty group leaves the overlay closed.
    pub fn show(&mut self, slides: Vec<Slide>, index: usize) {
        if slides.is_empty() {
            return;
        }
        self.index = if index < slides.len() { index } else { 0 };
        self.slides = slides;
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn current(&self) -> Option<&Slide> {
        self.slides.get(self.index)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Prev/next controls only make sense for multi-image groups.
    pub fn has_navigation(&self) -> bool {
        self.slides.len() > 1
    }

    pub fn prev(&mut self) {
        if self.has_navigation() {
            self.index = (self.index + self.slides.len() - 1) % self.slides.len();
        }
    }

    pub fn next(&mut self) {
        if self.has_navigation() {
            self.index = (self.index + 1) % self.slides.len();
        }
    }

    /// Keyboard handling while open. Returns `true` if the key was used.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if !self.open {
            return false;
        }
        match key {
            "Escape" => self.close(),
            "ArrowLeft" => self.prev(),
            "ArrowRight" => self.next(),
            _ => return false,
        }
        true
    }
}
