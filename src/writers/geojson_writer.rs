use crate::error::Result;
use geojson::{FeatureCollection, GeoJson};
use std::io::Write;

pub struct GeoJsonWriter {
    pretty: bool,
}

impl Default for GeoJsonWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl GeoJsonWriter {
    pub fn new() -> Self {
        Self { pretty: true }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Serialize the collection as a GeoJSON document followed by a newline.
    pub fn write_collection<W: Write>(
        &self,
        collection: FeatureCollection,
        mut writer: W,
    ) -> Result<()> {
        let document = GeoJson::FeatureCollection(collection);
        if self.pretty {
            serde_json::to_writer_pretty(&mut writer, &document)?;
        } else {
            serde_json::to_writer(&mut writer, &document)?;
        }
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }
}
