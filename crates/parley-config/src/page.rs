use serde::{Deserialize, Serialize};

fn default_version() -> u32 {
    1
}

/// CSS contract with the hosted chat page.
///
/// The class names belong to a third-party page and change whenever it is
/// redeployed, so they live here rather than in the page logic. Bump
/// `version` when shipping a new set.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct PageSelectors {
    #[serde(default = "default_version")]
    pub version: u32,
    pub conversation_list: String,
    pub conversation_pane: String,
    pub selected_conversation: String,
    pub settings_button: String,
    pub preferences_item: String,
    pub log_out_item: String,
    pub new_conversation: String,
    pub search_box: String,
    pub conversation_popover: String,
    pub mute_item: String,
    pub conversation_menu_list: String,
    pub archive_button: String,
    pub zoom_style_id: String,
    pub dark_mode_class: String,
}

impl Default for PageSelectors {
    fn default() -> Self {
        Self {
            version: default_version(),
            conversation_list: r#"div[role="navigation"] > ul > li"#.to_string(),
            conversation_pane: "._4u-c._1wfr > ._5f0v.uiScrollableArea".to_string(),
            selected_conversation: "._5l-3._1ht1._1ht2".to_string(),
            settings_button: "._30yy._2fug._p".to_string(),
            preferences_item: "._54nq._2i-c._558b._2n_z li:first-child a".to_string(),
            log_out_item: "._54nq._2i-c._558b._2n_z li:last-child a".to_string(),
            new_conversation: "._30yy[href='/new']".to_string(),
            search_box: "._58al".to_string(),
            conversation_popover: ".uiPopover".to_string(),
            mute_item: "._54nq._2i-c._558b._2n_z li:nth-child(1) a".to_string(),
            conversation_menu_list: "._54nq._2i-c._558b._2n_z ul".to_string(),
            archive_button: "._3quh._30yy._2u0._5ixy".to_string(),
            zoom_style_id: "zoomFactor".to_string(),
            dark_mode_class: "dark-mode".to_string(),
        }
    }
}
