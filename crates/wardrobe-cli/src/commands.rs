//! Main commands enum and primary subcommands.
//!
//! This module defines the available commands for the CLI tool.

use clap::Subcommand;

use wardrobe_core::ClothingType;

use crate::bootstrap::TOKEN_ENV_VAR;

/// Available commands for the virtual wardrobe tool.
#[derive(Subcommand)]
pub enum Commands {
    /// List the full catalogue (seed items plus your additions)
    List,

    /// Add a clothing item to the wardrobe
    Add {
        /// Display name of the garment
        name: String,
        /// Garment category (shirt, pants, dress, ...)
        #[arg(short = 't', long = "type")]
        kind: ClothingType,
        /// Color description (free text, e.g. "azul oscuro")
        #[arg(short, long)]
        color: String,
        /// Image URL (http(s) or data URI)
        #[arg(short, long)]
        image_url: String,
        /// Brand name
        #[arg(short, long)]
        brand: Option<String>,
        /// Free-text description
        #[arg(short, long)]
        description: Option<String>,
        /// Price
        #[arg(short, long)]
        price: Option<f64>,
        /// Where the garment can be bought
        #[arg(long)]
        source_url: Option<String>,
    },

    /// Remove a clothing item you added
    Remove {
        /// Id of the item to remove
        id: String,
    },

    /// Update a clothing item you added
    Update {
        /// Id of the item to update
        id: String,
        /// New display name
        #[arg(short, long)]
        name: Option<String>,
        /// New garment category
        #[arg(short = 't', long = "type")]
        kind: Option<ClothingType>,
        /// New color
        #[arg(short, long)]
        color: Option<String>,
        /// New image URL
        #[arg(short, long)]
        image_url: Option<String>,
        /// New brand name
        #[arg(short, long)]
        brand: Option<String>,
        /// New price
        #[arg(short, long)]
        price: Option<f64>,
    },

    /// Filter the catalogue by type, color, brand, or price
    Filter {
        /// Garment category to match exactly
        #[arg(short = 't', long = "type")]
        kind: Option<ClothingType>,
        /// Color substring, case-insensitive
        #[arg(short, long)]
        color: Option<String>,
        /// Brand substring, case-insensitive
        #[arg(short, long)]
        brand: Option<String>,
        /// Minimum price (requires --max-price)
        #[arg(long)]
        min_price: Option<f64>,
        /// Maximum price (requires --min-price)
        #[arg(long)]
        max_price: Option<f64>,
    },

    /// Manage the current selection
    Select {
        #[command(subcommand)]
        command: SelectCommand,
    },

    /// Manage saved outfits
    Outfit {
        #[command(subcommand)]
        command: OutfitCommand,
    },

    /// Render the current selection on a base photo via Gemini
    Generate {
        /// URL of the base person photo (http(s) or data URI)
        #[arg(short, long)]
        base_image: String,
        /// File to write the generated image to
        #[arg(short, long, default_value = "outfit.png")]
        output: String,
        /// Gemini API token (falls back to the environment, then the
        /// stored token)
        #[arg(long, env = TOKEN_ENV_VAR)]
        token: Option<String>,
    },

    /// Manage the stored Gemini API token
    Token {
        #[command(subcommand)]
        command: TokenCommand,
    },
}

/// Selection subcommands.
#[derive(Subcommand)]
pub enum SelectCommand {
    /// Add a catalogue item to the selection
    Add {
        /// Id of the item to select
        id: String,
    },
    /// Remove an item from the selection
    Remove {
        /// Id of the item to deselect
        id: String,
    },
    /// Clear the whole selection
    Clear,
    /// Show the selection and its derived outfit
    Show,
}

/// Outfit subcommands.
#[derive(Subcommand)]
pub enum OutfitCommand {
    /// Save the current selection as a named outfit
    Save {
        /// Name for the outfit
        name: String,
        /// Free-text description
        #[arg(short, long)]
        description: Option<String>,
    },
    /// List saved outfits
    List,
    /// Delete a saved outfit
    Delete {
        /// Id of the outfit to delete
        id: String,
    },
    /// Toggle an outfit's favorite flag
    Favorite {
        /// Id of the outfit to toggle
        id: String,
    },
}

/// Token subcommands.
#[derive(Subcommand)]
pub enum TokenCommand {
    /// Store an API token for generation
    Set {
        /// The token to store
        token: String,
    },
    /// Check whether the resolved token is accepted by the API
    Status,
}
