use crate::types::ArtistTrackGroup;

/// The mutable selection model of one session.
///
/// Holds every aggregated track group with a per-track `included` flag and
/// keeps the serialized output text in sync: every mutation re-renders it
/// synchronously, so [`Tracklist::serialized`] is always current and two
/// reads without an intervening mutation return identical text.
///
/// The serialized format is the tool's sole output artifact:
///
/// ```text
/// # Artist Name
/// spotify:track:...
/// spotify:track:...
///
/// # Next Artist
/// ...
/// ```
///
/// Groups appear in aggregation order, each followed by one blank separator
/// line. A group whose tracks are all excluded produces no output at all but
/// stays in the model and can be re-included later.
#[derive(Debug, Clone)]
pub struct Tracklist {
    groups: Vec<ArtistTrackGroup>,
    rendered: String,
}

impl Tracklist {
    pub fn new(groups: Vec<ArtistTrackGroup>) -> Self {
        let mut list = Self {
            groups,
            rendered: String::new(),
        };
        list.rerender();
        list
    }

    pub fn groups(&self) -> &[ArtistTrackGroup] {
        &self.groups
    }

    /// Number of currently included tracks across all groups.
    pub fn included_count(&self) -> usize {
        self.groups
            .iter()
            .flat_map(|g| &g.tracks)
            .filter(|t| t.included)
            .count()
    }

    /// Sets the `included` flag of the track with the given id.
    ///
    /// Track ids are globally unique, so the first match across all groups
    /// is the track. Returns `false` when no track has that id; the model
    /// is unchanged in that case.
    pub fn toggle(&mut self, track_id: &str, included: bool) -> bool {
        let found = self
            .groups
            .iter_mut()
            .flat_map(|g| g.tracks.iter_mut())
            .find(|t| t.track.id == track_id);

        match found {
            Some(entry) => {
                entry.included = included;
                self.rerender();
                true
            }
            None => false,
        }
    }

    pub fn select_all(&mut self) {
        self.set_all(true);
    }

    pub fn deselect_all(&mut self) {
        self.set_all(false);
    }

    /// The serialized track-URI text, regenerated on every mutation.
    pub fn serialized(&self) -> &str {
        &self.rendered
    }

    fn set_all(&mut self, included: bool) {
        for group in &mut self.groups {
            for entry in &mut group.tracks {
                entry.included = included;
            }
        }
        self.rerender();
    }

    fn rerender(&mut self) {
        let mut out = String::new();

        for group in &self.groups {
            let included: Vec<&str> = group
                .tracks
                .iter()
                .filter(|t| t.included)
                .map(|t| t.track.uri.as_str())
                .collect();

            if included.is_empty() {
                continue;
            }

            out.push_str(&format!("# {}\n", group.artist_name));
            for uri in included {
                out.push_str(uri);
                out.push('\n');
            }
            out.push('\n');
        }

        self.rendered = out;
    }
}
