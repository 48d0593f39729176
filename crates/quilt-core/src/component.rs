//! The component-type vocabulary and its mapping onto Android view classes.
//!
//! Layout documents tag each node with an abstract component type
//! (`"Text"`, `"HStack"`, ...). [`ComponentKind`] is the closed enumeration
//! of that vocabulary; unrecognized tags fall back to a generic container or
//! leaf depending on whether the node has children. The auxiliary queries on
//! [`ComponentKind`] (container family, orientation, text-bearing,
//! interactive) feed the attribute classifiers and the drawable composer.

use std::fmt;

/// Layout-container family of a parent node.
///
/// The same logical alignment intent maps to different output constructs
/// per family: a gravity flag in a linear container, an edge constraint in
/// a relative container, and a layout-gravity enum in a frame/overlay
/// container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerFamily {
    /// Sequential stacking (`LinearLayout`).
    Linear,
    /// Constraint/relative positioning (`ConstraintLayout`).
    Relative,
    /// Overlay stacking (`FrameLayout` and friends).
    Frame,
}

/// Child-arrangement axis for linear containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horizontal => write!(f, "horizontal"),
            Self::Vertical => write!(f, "vertical"),
        }
    }
}

/// The closed set of recognized component types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Text,
    Button,
    IconButton,
    Image,
    TextField,
    Checkbox,
    Switch,
    Slider,
    ProgressBar,
    DatePicker,
    Select,
    HStack,
    VStack,
    ZStack,
    Relative,
    ScrollView,
    List,
    Card,
    Spacer,
    Divider,
    WebView,
    /// Fallback for an unrecognized tag on a node with children.
    Container,
    /// Fallback for an unrecognized tag on a leaf node.
    View,
}

impl ComponentKind {
    /// Maps an abstract component tag to a [`ComponentKind`].
    ///
    /// Unknown tags are not an error: they fall back to
    /// [`ComponentKind::Container`] when the node has children and
    /// [`ComponentKind::View`] otherwise.
    pub fn from_tag(tag: &str, has_children: bool) -> Self {
        match tag {
            "Text" | "Label" => Self::Text,
            "Button" => Self::Button,
            "IconButton" | "ImageButton" => Self::IconButton,
            "Image" | "Icon" => Self::Image,
            "TextField" | "Input" | "EditText" => Self::TextField,
            "Checkbox" | "CheckBox" => Self::Checkbox,
            "Switch" | "Toggle" => Self::Switch,
            "Slider" | "SeekBar" => Self::Slider,
            "Progress" | "ProgressBar" => Self::ProgressBar,
            "DatePicker" => Self::DatePicker,
            "Select" | "Dropdown" | "Spinner" => Self::Select,
            "HStack" | "Row" => Self::HStack,
            "VStack" | "Column" => Self::VStack,
            "ZStack" | "Box" | "Overlay" => Self::ZStack,
            "Relative" | "Constraint" => Self::Relative,
            "ScrollView" | "Scroll" => Self::ScrollView,
            "List" | "RecyclerView" => Self::List,
            "Card" => Self::Card,
            "Spacer" => Self::Spacer,
            "Divider" => Self::Divider,
            "WebView" => Self::WebView,
            _ if has_children => Self::Container,
            _ => Self::View,
        }
    }

    /// Returns the concrete Android view class for this component.
    pub fn android_class(&self) -> &'static str {
        match self {
            Self::Text => "TextView",
            Self::Button => "Button",
            Self::IconButton => "ImageButton",
            Self::Image => "ImageView",
            Self::TextField => "EditText",
            Self::Checkbox => "CheckBox",
            Self::Switch => "Switch",
            Self::Slider => "SeekBar",
            Self::ProgressBar => "ProgressBar",
            Self::DatePicker => "DatePicker",
            Self::Select => "Spinner",
            Self::HStack | Self::VStack => "LinearLayout",
            Self::ZStack | Self::Container => "FrameLayout",
            Self::Relative => "androidx.constraintlayout.widget.ConstraintLayout",
            Self::ScrollView => "ScrollView",
            Self::List => "androidx.recyclerview.widget.RecyclerView",
            Self::Card => "androidx.cardview.widget.CardView",
            Self::Spacer => "Space",
            Self::Divider | Self::View => "View",
            Self::WebView => "WebView",
        }
    }

    /// Returns `true` if this component holds child nodes.
    pub fn is_container(&self) -> bool {
        self.container_family().is_some()
    }

    /// Returns the layout-container family, or `None` for leaf components.
    pub fn container_family(&self) -> Option<ContainerFamily> {
        match self {
            Self::HStack | Self::VStack => Some(ContainerFamily::Linear),
            Self::Relative => Some(ContainerFamily::Relative),
            Self::ZStack | Self::ScrollView | Self::List | Self::Card | Self::Container => {
                Some(ContainerFamily::Frame)
            }
            _ => None,
        }
    }

    /// Returns the default child-arrangement axis for linear containers.
    pub fn default_orientation(&self) -> Option<Orientation> {
        match self {
            Self::HStack => Some(Orientation::Horizontal),
            Self::VStack => Some(Orientation::Vertical),
            _ => None,
        }
    }

    /// Returns `true` if a generic `color` attribute means the foreground
    /// text color for this component (otherwise it means tint).
    pub fn is_text_bearing(&self) -> bool {
        matches!(
            self,
            Self::Text | Self::Button | Self::TextField | Self::Checkbox | Self::Switch
        )
    }

    /// Returns `true` for components that conventionally show interaction
    /// feedback even without an explicit click handler.
    pub fn is_interactive(&self) -> bool {
        matches!(
            self,
            Self::Button | Self::IconButton | Self::Checkbox | Self::Switch | Self::Card
        )
    }

    /// Returns `true` for icon-like interactive components whose touch
    /// feedback needs an explicit mask layer when no opaque background is
    /// present.
    pub fn is_icon_like(&self) -> bool {
        matches!(self, Self::IconButton)
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.android_class())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tags() {
        assert_eq!(ComponentKind::from_tag("Text", false), ComponentKind::Text);
        assert_eq!(ComponentKind::from_tag("HStack", true), ComponentKind::HStack);
        assert_eq!(ComponentKind::from_tag("Row", true), ComponentKind::HStack);
        assert_eq!(
            ComponentKind::from_tag("TextField", false),
            ComponentKind::TextField
        );
    }

    #[test]
    fn test_unknown_tag_fallback() {
        assert_eq!(
            ComponentKind::from_tag("Widget", true),
            ComponentKind::Container
        );
        assert_eq!(ComponentKind::from_tag("Widget", false), ComponentKind::View);
    }

    #[test]
    fn test_container_families() {
        assert_eq!(
            ComponentKind::HStack.container_family(),
            Some(ContainerFamily::Linear)
        );
        assert_eq!(
            ComponentKind::Relative.container_family(),
            Some(ContainerFamily::Relative)
        );
        assert_eq!(
            ComponentKind::ZStack.container_family(),
            Some(ContainerFamily::Frame)
        );
        assert_eq!(ComponentKind::Text.container_family(), None);
    }

    #[test]
    fn test_orientation_defaults() {
        assert_eq!(
            ComponentKind::HStack.default_orientation(),
            Some(Orientation::Horizontal)
        );
        assert_eq!(
            ComponentKind::VStack.default_orientation(),
            Some(Orientation::Vertical)
        );
        assert_eq!(ComponentKind::ZStack.default_orientation(), None);
    }

    #[test]
    fn test_predicates() {
        assert!(ComponentKind::Text.is_text_bearing());
        assert!(!ComponentKind::Image.is_text_bearing());
        assert!(ComponentKind::Button.is_interactive());
        assert!(!ComponentKind::Text.is_interactive());
        assert!(ComponentKind::IconButton.is_icon_like());
        assert!(!ComponentKind::Button.is_icon_like());
    }

    #[test]
    fn test_android_classes() {
        assert_eq!(ComponentKind::VStack.android_class(), "LinearLayout");
        assert_eq!(ComponentKind::Container.android_class(), "FrameLayout");
        assert_eq!(
            ComponentKind::Card.android_class(),
            "androidx.cardview.widget.CardView"
        );
    }
}
