use hubfeed_types::RefType;
use serde::Serialize;

/// Symbolic badge icon; renderers map it to an actual image or glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconKey {
    Fork,
    Repository,
    Branch,
    Tag,
    Comment,
    Issue,
    Collaborator,
    PullRequest,
    Push,
    Star,
}

impl IconKey {
    /// Badge for a create event, by the kind of ref created
    pub fn for_ref_type(ref_type: RefType) -> Self {
        match ref_type {
            RefType::Repository => Self::Repository,
            RefType::Branch => Self::Branch,
            RefType::Tag => Self::Tag,
        }
    }

    /// Asset name of the icon
    pub fn resource_name(&self) -> &'static str {
        match self {
            Self::Fork => "icon_cell_badge_fork",
            Self::Repository => "icon_cell_badge_repository",
            Self::Branch => "icon_cell_badge_branch",
            Self::Tag => "icon_cell_badge_tag",
            Self::Comment => "icon_cell_badge_comment",
            Self::Issue => "icon_cell_badge_issue",
            Self::Collaborator => "icon_cell_badge_collaborator",
            Self::PullRequest => "icon_cell_badge_pull_request",
            Self::Push => "icon_cell_badge_push",
            Self::Star => "icon_cell_badge_star",
        }
    }
}

/// Icon asset lookup and template (monochrome) conversion.
pub trait IconResources {
    type Image;

    fn image(&self, key: IconKey) -> Option<Self::Image>;

    /// Monochrome variant of `image`, to be tinted by the badge color
    fn template(&self, image: Self::Image) -> Self::Image;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BadgeImage {
    pub icon: IconKey,
    /// Draw as a template image tinted with the cell's badge color
    pub template: bool,
}

impl BadgeImage {
    pub fn template(icon: IconKey) -> Self {
        Self {
            icon,
            template: true,
        }
    }

    pub fn resolve<R: IconResources>(&self, resources: &R) -> Option<R::Image> {
        let image = resources.image(self.icon)?;
        if self.template {
            Some(resources.template(image))
        } else {
            Some(image)
        }
    }
}

/// Badge color tokens
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorToken {
    #[default]
    FlatGreenDark,
}

impl ColorToken {
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Self::FlatGreenDark => (39, 174, 96),
        }
    }

    pub fn hex(&self) -> String {
        let (r, g, b) = self.rgb();
        format!("#{:02X}{:02X}{:02X}", r, g, b)
    }
}
