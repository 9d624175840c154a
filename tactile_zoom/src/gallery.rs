// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::Size;
use log::debug;
use tactile_gesture::ConfigError;

use crate::config::ZoomConfig;
use crate::geometry::ViewportGeometry;
use crate::surface::{ZoomEvent, ZoomInput, ZoomSurface};

/// Requests a [`Gallery`] makes of its host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GalleryEvent {
    /// Enable or disable scrolling of the horizontal page container.
    ScrollEnable(bool),
    /// The settled page changed.
    PageChanged(usize),
    /// A surface finished its close animation.
    CloseCompleted,
}

/// A horizontally paged list of zoomable surfaces sharing one backdrop.
///
/// Input goes to the surface of the current page. Scroll requests from all
/// surfaces are merged into a single container flag, emitted only when it
/// changes.
#[derive(Clone, Debug)]
pub struct Gallery {
    container: Size,
    surfaces: Vec<ZoomSurface>,
    content: Vec<Size>,
    current: usize,
    scroll_enabled: bool,
    events: Vec<GalleryEvent>,
}

impl Gallery {
    /// Creates a gallery of `page_count` unmeasured surfaces showing `initial_index`.
    #[must_use]
    pub fn new(config: ZoomConfig, page_count: usize, initial_index: usize) -> Self {
        let surfaces = (0..page_count)
            .map(|_| ZoomSurface::new(config, ViewportGeometry::UNMEASURED))
            .collect();
        Self {
            container: Size::ZERO,
            surfaces,
            content: alloc::vec![Size::ZERO; page_count],
            current: initial_index.min(page_count.saturating_sub(1)),
            scroll_enabled: true,
            events: Vec::new(),
        }
    }

    /// Creates a gallery after validating `config`.
    pub fn try_new(
        config: ZoomConfig,
        page_count: usize,
        initial_index: usize,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config, page_count, initial_index))
    }

    /// Number of pages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    /// Returns `true` if the gallery has no pages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }

    /// Index of the current page.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Surface of the current page.
    #[must_use]
    pub fn current(&self) -> Option<&ZoomSurface> {
        self.surfaces.get(self.current)
    }

    /// Surface of page `index`.
    #[must_use]
    pub fn surface(&self, index: usize) -> Option<&ZoomSurface> {
        self.surfaces.get(index)
    }

    /// Container scroll state last requested of the host.
    #[must_use]
    pub fn is_scroll_enabled(&self) -> bool {
        self.scroll_enabled
    }

    /// Opacity of the shared backdrop, driven by the current surface.
    #[must_use]
    pub fn backdrop_opacity(&self) -> f64 {
        self.current()
            .map_or(1.0, |s| s.state().backdrop_opacity)
    }

    /// Sets the container size and re-fits every page.
    pub fn set_container(&mut self, container: Size) {
        if self.container == container {
            return;
        }
        self.container = container;
        for (surface, &content) in self.surfaces.iter_mut().zip(&self.content) {
            surface.set_geometry(ViewportGeometry::fit(container, content));
        }
    }

    /// Records the intrinsic size of page `index`'s content once it has loaded.
    pub fn set_content_size(&mut self, index: usize, content: Size) {
        let Some(slot) = self.content.get_mut(index) else {
            return;
        };
        *slot = content;
        if let Some(surface) = self.surfaces.get_mut(index) {
            surface.set_geometry(ViewportGeometry::fit(self.container, content));
        }
    }

    /// Routes `input` to the current surface.
    pub fn handle(&mut self, input: ZoomInput) {
        if let Some(surface) = self.surfaces.get_mut(self.current) {
            surface.handle(input);
        }
        self.collect();
    }

    /// Advances every surface to host time `now`.
    pub fn tick(&mut self, now: u64) {
        for surface in &mut self.surfaces {
            surface.tick(now);
        }
        self.collect();
    }

    /// Handles the end of a container page scroll at horizontal offset `offset_x`.
    ///
    /// Surfaces other than the current one are reset.
    pub fn on_momentum_scroll_end(&mut self, offset_x: f64) {
        let width = self.container.width;
        if width <= 0.0 || self.surfaces.is_empty() {
            return;
        }
        #[expect(
            clippy::cast_possible_truncation,
            reason = "page positions are small non-negative values"
        )]
        let page = ((offset_x / width + 0.5).max(0.0) as usize).min(self.surfaces.len() - 1);
        if page != self.current {
            debug!("gallery page {} -> {page}", self.current);
            self.current = page;
            self.events.push(GalleryEvent::PageChanged(page));
        }
        for (index, surface) in self.surfaces.iter_mut().enumerate() {
            if index != page {
                surface.reset();
            }
        }
    }

    /// Takes the queued output events.
    pub fn drain_events(&mut self) -> impl Iterator<Item = GalleryEvent> + '_ {
        self.events.drain(..)
    }

    fn collect(&mut self) {
        for surface in &mut self.surfaces {
            for event in surface.drain_events() {
                match event {
                    ZoomEvent::RequestScrollEnable(enabled) => {
                        if self.scroll_enabled != enabled {
                            self.scroll_enabled = enabled;
                            self.events.push(GalleryEvent::ScrollEnable(enabled));
                        }
                    }
                    ZoomEvent::CloseCompleted => self.events.push(GalleryEvent::CloseCompleted),
                }
            }
        }
    }
}
