use std::str::FromStr;

const PIX2PIX_CATALOG: &str = "http://efrosgans.eecs.berkeley.edu/pix2pix/datasets/";
const CYCLEGAN_CATALOG: &str = "http://efrosgans.eecs.berkeley.edu/pix2pix/datasets";

/// Dataset family, each served from its own catalog page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Technique {
    CycleGan,
    Pix2Pix,
}

impl Technique {
    /// Case-insensitive lookup. Unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "cyclegan" => Some(Technique::CycleGan),
            "pix2pix" => Some(Technique::Pix2Pix),
            _ => None,
        }
    }

    pub fn catalog_url(&self) -> &'static str {
        match self {
            Technique::CycleGan => CYCLEGAN_CATALOG,
            Technique::Pix2Pix => PIX2PIX_CATALOG,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Technique::CycleGan => "cyclegan",
            Technique::Pix2Pix => "pix2pix",
        }
    }
}

impl FromStr for Technique {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Technique::from_name(s)
            .ok_or_else(|| format!("unknown technique '{s}' (expected cyclegan or pix2pix)"))
    }
}
