//! Host resources — bitmaps, fonts and the ledger that accounts for them
//!
//! Everything the face acquires from the host (bitmaps, custom fonts, and
//! the layers themselves) carries a [`Lease`]. Dropping the owner drops the
//! lease, which is what "destroying" a resource means here. The
//! [`ResourceLedger`] counts live leases per kind and keeps the order in
//! which they were taken and given back, so a host (or a test) can check
//! that teardown released everything exactly once.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::error::{FaceError, Result};
use crate::geometry::Size;

/// Statically bundled assets the face refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceId {
    ImagePrideBackground,
    FontFredokaOne40,
    FontFredokaOne20,
}

impl ResourceId {
    pub fn name(self) -> &'static str {
        match self {
            ResourceId::ImagePrideBackground => "pride_background",
            ResourceId::FontFredokaOne40 => "fredoka_one_40",
            ResourceId::FontFredokaOne20 => "fredoka_one_20",
        }
    }

    /// Point size for font resources, `None` for images.
    pub fn point_size(self) -> Option<u16> {
        match self {
            ResourceId::ImagePrideBackground => None,
            ResourceId::FontFredokaOne40 => Some(40),
            ResourceId::FontFredokaOne20 => Some(20),
        }
    }

    /// Font family shared by all sizes of the same typeface.
    pub fn font_family(self) -> Option<&'static str> {
        match self {
            ResourceId::ImagePrideBackground => None,
            ResourceId::FontFredokaOne40 | ResourceId::FontFredokaOne20 => Some("FredokaOne"),
        }
    }
}

/// Fonts the host ships built in. These are never leased.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SystemFont {
    BithamBold42,
}

impl SystemFont {
    pub fn point_size(self) -> u16 {
        match self {
            SystemFont::BithamBold42 => 42,
        }
    }
}

/// What a lease stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Bitmap,
    Font,
    BitmapLayer,
    TextLayer,
}

const KINDS: usize = 4;

impl ResourceKind {
    fn index(self) -> usize {
        match self {
            ResourceKind::Bitmap => 0,
            ResourceKind::Font => 1,
            ResourceKind::BitmapLayer => 2,
            ResourceKind::TextLayer => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerEvent {
    Acquired(ResourceKind, &'static str),
    Released(ResourceKind, &'static str),
}

#[derive(Debug, Default)]
struct LedgerState {
    live: [usize; KINDS],
    events: Vec<LedgerEvent>,
}

/// Shared accounting of live host resources.
///
/// Cloning the ledger yields another handle onto the same counters.
#[derive(Debug, Clone, Default)]
pub struct ResourceLedger {
    state: Rc<RefCell<LedgerState>>,
}

impl ResourceLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a newly acquired resource. It stays live until the returned
    /// lease is dropped.
    pub fn acquire(&self, kind: ResourceKind, label: &'static str) -> Lease {
        {
            let mut state = self.state.borrow_mut();
            state.live[kind.index()] += 1;
            state.events.push(LedgerEvent::Acquired(kind, label));
        }
        tracing::trace!(?kind, label, "acquired");
        Lease {
            state: Rc::clone(&self.state),
            kind,
            label,
        }
    }

    pub fn live(&self, kind: ResourceKind) -> usize {
        self.state.borrow().live[kind.index()]
    }

    pub fn live_total(&self) -> usize {
        self.state.borrow().live.iter().sum()
    }

    /// Acquire/release history, oldest first.
    pub fn events(&self) -> Vec<LedgerEvent> {
        self.state.borrow().events.clone()
    }

    /// Labels released so far, in release order.
    pub fn released(&self) -> Vec<&'static str> {
        self.state
            .borrow()
            .events
            .iter()
            .filter_map(|e| match e {
                LedgerEvent::Released(_, label) => Some(*label),
                LedgerEvent::Acquired(..) => None,
            })
            .collect()
    }

    /// Forget the history, keeping the live counts.
    pub fn clear_events(&self) {
        self.state.borrow_mut().events.clear();
    }
}

/// Proof that a resource is held. Released on drop.
pub struct Lease {
    state: Rc<RefCell<LedgerState>>,
    kind: ResourceKind,
    label: &'static str,
}

impl Lease {
    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    pub fn label(&self) -> &'static str {
        self.label
    }
}

impl fmt::Debug for Lease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lease")
            .field("kind", &self.kind)
            .field("label", &self.label)
            .finish()
    }
}

impl Drop for Lease {
    fn drop(&mut self) {
        let mut state = self.state.borrow_mut();
        let live = &mut state.live[self.kind.index()];
        *live = live.saturating_sub(1);
        state.events.push(LedgerEvent::Released(self.kind, self.label));
        drop(state);
        tracing::trace!(kind = ?self.kind, label = self.label, "released");
    }
}

/// Decoded RGBA8 image owned by whoever loaded it.
#[derive(Debug)]
pub struct Bitmap {
    id: ResourceId,
    size: Size,
    pixels: Vec<u8>,
    _lease: Lease,
}

impl Bitmap {
    /// Wrap decoded pixels. `pixels` must hold exactly `size.area()` RGBA
    /// quadruplets.
    pub fn from_rgba(id: ResourceId, size: Size, pixels: Vec<u8>, lease: Lease) -> Result<Self> {
        let expected = size.area() * 4;
        if pixels.len() != expected {
            return Err(FaceError::BitmapSize {
                id,
                len: pixels.len(),
                expected,
            });
        }
        Ok(Self {
            id,
            size,
            pixels,
            _lease: lease,
        })
    }

    pub fn id(&self) -> ResourceId {
        self.id
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontFace {
    Custom(ResourceId),
    System(SystemFont),
}

#[derive(Debug)]
struct FontInner {
    face: FontFace,
    point_size: u16,
    _lease: Option<Lease>,
}

/// Shared font handle. Clones refer to the same loaded font; a custom font
/// is released when the last clone drops.
#[derive(Debug, Clone)]
pub struct Font {
    inner: Rc<FontInner>,
}

impl Font {
    pub fn custom(id: ResourceId, point_size: u16, lease: Lease) -> Self {
        Self {
            inner: Rc::new(FontInner {
                face: FontFace::Custom(id),
                point_size,
                _lease: Some(lease),
            }),
        }
    }

    pub fn system(font: SystemFont) -> Self {
        Self {
            inner: Rc::new(FontInner {
                face: FontFace::System(font),
                point_size: font.point_size(),
                _lease: None,
            }),
        }
    }

    pub fn face(&self) -> FontFace {
        self.inner.face
    }

    pub fn point_size(&self) -> u16 {
        self.inner.point_size
    }
}

/// The host side of resource loading.
pub trait ResourceProvider {
    /// Ledger that every lease handed out by this provider is drawn from.
    fn ledger(&self) -> &ResourceLedger;

    fn load_bitmap(&mut self, id: ResourceId) -> Result<Bitmap>;

    fn load_custom_font(&mut self, id: ResourceId) -> Result<Font>;

    fn system_font(&mut self, font: SystemFont) -> Font {
        Font::system(font)
    }
}
