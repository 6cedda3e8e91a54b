use ib_common::util::UUID;

/// Whose head this is. The host will fill in the other field (and the skin)
/// when it resolves the profile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SkullOwner {
  Name(String),
  Uuid(UUID),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SkullMeta {
  pub owner:   Option<SkullOwner>,
  /// A base64 encoded `textures` profile property. If set, this skin is
  /// shown, without needing to look up the owner.
  pub texture: Option<String>,
}
