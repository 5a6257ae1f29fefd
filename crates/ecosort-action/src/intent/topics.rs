//! Offline topic responder.
//!
//! Used when the dialogue runtime cannot be reached: a free-text chat
//! message is matched against a small ordered keyword table and answered
//! with fixed general guidance. Same policy as category resolution
//! (lowercase substring, first match wins), with a greeting as default.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// General guidance topics, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Waste,
    Recycling,
    Composting,
    Plastic,
    WasteBank,
    /// Nothing matched; introduce the bot and what it can help with.
    Greeting,
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Topic::Waste => write!(f, "waste"),
            Topic::Recycling => write!(f, "recycling"),
            Topic::Composting => write!(f, "composting"),
            Topic::Plastic => write!(f, "plastic"),
            Topic::WasteBank => write!(f, "waste_bank"),
            Topic::Greeting => write!(f, "greeting"),
        }
    }
}

impl Topic {
    /// Fixed reply text for this topic.
    pub fn reply(&self) -> &'static str {
        match self {
            Topic::WasteBank => {
                "Bank sampah adalah tempat menabung sampah yang memiliki nilai ekonomis. \
                 Anda bisa menyetorkan sampah anorganik yang sudah dipilah dan mendapatkan \
                 uang atau poin. Cari bank sampah terdekat di aplikasi EcoSort!"
            }
            Topic::Waste => {
                "Untuk pengelolaan sampah yang baik, pisahkan sampah organik dan anorganik. \
                 Sampah organik bisa dijadikan kompos, sedangkan sampah anorganik seperti \
                 plastik, kertas, dan logam bisa didaur ulang."
            }
            Topic::Recycling => {
                "Daur ulang sangat penting untuk lingkungan! Anda bisa mendaur ulang plastik, \
                 kertas, logam, dan kaca. Pastikan sampah dalam kondisi bersih sebelum \
                 didaur ulang."
            }
            Topic::Composting => {
                "Sampah organik seperti sisa makanan, daun, dan sayuran bisa dijadikan kompos. \
                 Caranya: campurkan sampah organik dengan tanah, aduk secara berkala, dan \
                 tunggu 2-3 bulan hingga menjadi pupuk kompos."
            }
            Topic::Plastic => {
                "Plastik membutuhkan waktu ratusan tahun untuk terurai. Kurangi penggunaan \
                 plastik sekali pakai, gunakan kantong belanja yang bisa dipakai berulang, \
                 dan pastikan plastik bekas didaur ulang."
            }
            Topic::Greeting => {
                "Halo! Saya EcoBot, asisten untuk pengelolaan sampah. Saya bisa membantu Anda \
                 dengan informasi tentang: cara memilah sampah, daur ulang, membuat kompos, \
                 bank sampah, dan tips mengurangi sampah. Ada yang bisa saya bantu?"
            }
        }
    }
}

const TOPIC_TABLE: &[(Topic, &[&str])] = &[
    (Topic::Waste, &["sampah", "trash", "waste"]),
    (Topic::Recycling, &["daur ulang", "recycle"]),
    (Topic::Composting, &["kompos", "organik"]),
    (Topic::Plastic, &["plastik"]),
    (Topic::WasteBank, &["bank sampah"]),
];

/// Matches chat messages against the topic table.
#[derive(Debug, Clone, Copy, Default)]
pub struct TopicResolver;

impl TopicResolver {
    pub fn new() -> Self {
        Self
    }

    /// Pick the first topic whose keyword occurs in `message`.
    pub fn resolve(&self, message: &str) -> Topic {
        let lowered = message.to_lowercase();
        let topic = TOPIC_TABLE
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| lowered.contains(k)))
            .map(|(topic, _)| *topic)
            .unwrap_or(Topic::Greeting);
        debug!(%topic, "Offline topic resolved");
        topic
    }

    /// Resolve and return the reply text directly.
    pub fn reply(&self, message: &str) -> &'static str {
        self.resolve(message).reply()
    }
}
