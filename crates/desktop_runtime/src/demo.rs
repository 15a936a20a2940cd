//! Offline content shown when the backend cannot be reached.

use platform_host::{BootConfig, FileNode, FileNodeType, DESKTOP_NODE_ID};

use crate::settings::DEFAULT_WALLPAPER;

pub fn demo_boot_config() -> BootConfig {
    BootConfig {
        os_version: "1.0.0".to_string(),
        theme: "dark".to_string(),
        wallpaper_url: DEFAULT_WALLPAPER.to_string(),
        username: "Visitor".to_string(),
    }
}

pub fn demo_icons() -> Vec<FileNode> {
    let desktop = Some(DESKTOP_NODE_ID);
    vec![
        FileNode::new("cv", desktop, "My CV", FileNodeType::Shortcut).with_content("app:cvviewer"),
        FileNode::new("github", desktop, "GitHub", FileNodeType::Shortcut)
            .with_content("https://github.com"),
        FileNode::new("about", desktop, "About Me.txt", FileNodeType::File)
            .with_content("About me content"),
        FileNode::new("projects", desktop, "Projects", FileNodeType::Directory),
        FileNode::new("terminal", desktop, "Terminal", FileNodeType::Shortcut)
            .with_content("app:terminal"),
        FileNode::new("task-manager", desktop, "Task Manager", FileNodeType::Shortcut)
            .with_content("app:taskmanager"),
        FileNode::new("settings", desktop, "Settings", FileNodeType::Shortcut)
            .with_content("app:settings"),
        FileNode::new("file-explorer", desktop, "File Explorer", FileNodeType::Shortcut)
            .with_content("app:fileexplorer"),
        FileNode::new("chrome", desktop, "Chrome", FileNodeType::Shortcut)
            .with_content("app:chrome"),
    ]
}
