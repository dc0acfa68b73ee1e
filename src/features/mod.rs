//! Homepage feature catalog.
//!
//! An ordered list of feature descriptors, authored once as a literal
//! and mapped one-to-one onto visual cards by [`render`]. Order is
//! presentation order; the renderer never filters, deduplicates, or
//! reorders.
//!
//! Descriptor contents are trusted as authored: an empty field renders
//! an empty slot rather than failing the build.

mod render;

pub use render::render_features;

use serde::Serialize;

/// One homepage showcase card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeatureDescriptor {
    /// Display name, expected (not enforced) unique within the catalog.
    pub title: &'static str,
    /// A single glyph shown above the title.
    pub icon: &'static str,
    /// Short explanatory copy; may contain inline markup.
    pub description: &'static str,
}

/// The authored catalog, in presentation order.
pub const FEATURES: &[FeatureDescriptor] = &[
    FeatureDescriptor {
        title: "High Performance",
        icon: "🚀",
        description: "QuantaDB is designed for speed and efficiency, providing fast data access and processing.",
    },
    FeatureDescriptor {
        title: "Scalable Architecture",
        icon: "📈",
        description: "Scale your database seamlessly to handle growing amounts of data and user traffic.",
    },
    FeatureDescriptor {
        title: "Flexible Data Model",
        icon: "🧩",
        description: "QuantaDB supports a flexible data model, allowing you to adapt to changing data structures easily.",
    },
    FeatureDescriptor {
        title: "Reliable and Durable",
        icon: "🔒",
        description: "Ensuring data safety and availability with built-in reliability and durability features.",
    },
    FeatureDescriptor {
        title: "Easy Integration",
        icon: "🔌",
        description: "Integrate QuantaDB effortlessly with your existing applications and workflows.",
    },
    FeatureDescriptor {
        title: "Powerful Query Engine",
        icon: "⚙️",
        description: "Utilize a powerful query engine for efficient data retrieval, filtering, and sorting.",
    },
];
