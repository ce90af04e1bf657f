#![allow(dead_code)]

//! Shared fixtures: a schema modeled after a realistic component library.

use dashdef::schema::{ComponentDefinition, PropertyEntry, SchemaBuilder};
use dashdef::{AnalysisHost, SchemaRegistry, TextSize};
use once_cell::sync::Lazy;

static SCHEMA: Lazy<SchemaRegistry> = Lazy::new(build_schema);

pub fn schema() -> SchemaRegistry {
    SCHEMA.clone()
}

pub fn host() -> AnalysisHost {
    AnalysisHost::new(schema())
}

/// Offset right after the first occurrence of `marker`.
pub fn after(text: &str, marker: &str) -> TextSize {
    let pos = text.find(marker).expect("marker not found") + marker.len();
    TextSize::new(pos as u32)
}

pub fn display_names(set: &dashdef::CompletionSet) -> Vec<String> {
    set.items.iter().map(|i| i.display.to_string()).collect()
}

fn build_schema() -> SchemaRegistry {
    SchemaBuilder::new()
        // -------- namespace roots (the root aggregate's generic bags) -----
        .namespace_entry(
            "Library",
            "type",
            PropertyEntry::typed("string").with_doc("Component type, e.g. Image, Button"),
        )
        .namespace_entry(
            "Library",
            "properties",
            PropertyEntry::untyped().with_doc("An object containing properties for the component"),
        )
        .namespace_entry(
            "Library",
            "settings",
            PropertyEntry::untyped()
                .with_doc("An object containing settings for the component and its children"),
        )
        .namespace_entry(
            "Library",
            "libraryComponentId",
            PropertyEntry::typed("string")
                .with_doc("A string referencing a node id in the component library"),
        )
        .namespace_entry(
            "Library",
            "components",
            PropertyEntry::untyped().with_doc("An object containing child components"),
        )
        .namespace_entry("Library", "linkedComponents", PropertyEntry::typed("[]"))
        .namespace_entry("Library", "init", PropertyEntry::typed("fn()"))
        .namespace_entry("Library", "removed", PropertyEntry::typed("bool"))
        .namespace_entry(
            "Library",
            "editMode",
            PropertyEntry::untyped()
                .with_child("userDefined", PropertyEntry::typed("bool"))
                .with_child("move", PropertyEntry::typed("bool"))
                .with_child("remove", PropertyEntry::typed("bool"))
                .with_child(
                    "add",
                    PropertyEntry::untyped()
                        .with_child("allow", PropertyEntry::typed("bool"))
                        .with_child("thumbnail", PropertyEntry::typed("string"))
                        .with_child("index", PropertyEntry::typed("number")),
                ),
        )
        .namespace_entry("Sites", "configuration", PropertyEntry::untyped())
        .namespace_entry("Sites", "init", PropertyEntry::typed("fn()"))
        .namespace_entry("Sites", "supportedLanguages", PropertyEntry::untyped())
        .namespace_entry("Constructs", "constructId", PropertyEntry::typed("string"))
        .namespace_entry("Packages", "packageId", PropertyEntry::typed("string"))
        // -------- component types ----------------------------------------
        .component(
            "DashboardComponent",
            ComponentDefinition::new()
                .with_doc("The base class for all dashboard components")
                .property("elementID", PropertyEntry::typed("string").with_doc("DOM element id"))
                .property("cssClassName", PropertyEntry::typed("string"))
                .property("title", PropertyEntry::typed("string"))
                .property("subtitle", PropertyEntry::typed("string"))
                .property("width", PropertyEntry::typed("number"))
                .property("height", PropertyEntry::typed("number"))
                .property("style", PropertyEntry::untyped())
                .property("visible", PropertyEntry::typed("bool"))
                .property("showTitle", PropertyEntry::typed("bool"))
                .property("showIf", PropertyEntry::typed("fn()"))
                .setting("exportFileName", PropertyEntry::typed("string"))
                .setting("allowExport", PropertyEntry::typed("bool"))
                .method("update", PropertyEntry::typed("fn()").with_doc("Redraws the component"))
                .method("show", PropertyEntry::typed("fn()"))
                .method("hide", PropertyEntry::typed("fn()"))
                .method("on", PropertyEntry::typed("fn(event: string, handler: fn())")),
        )
        .component(
            "Widget",
            ComponentDefinition::new()
                .with_proto("DashboardComponent")
                .with_doc("The base class for all widgets")
                .property("hasHeader", PropertyEntry::typed("bool"))
                .property("dummyImagePath", PropertyEntry::typed("string"))
                .property("columnIndex", PropertyEntry::typed("number"))
                .property(
                    "size",
                    PropertyEntry::typed("string")
                        .with_doc("One of the SIZE constants")
                        .with_data("Widget.SIZE"),
                )
                .property("bodyStyle", PropertyEntry::untyped())
                .property(
                    "position",
                    PropertyEntry::typed("string").with_data("Widget.POSITION"),
                )
                .property("enabled", PropertyEntry::typed("bool"))
                .property(
                    "exportOptions",
                    PropertyEntry::untyped()
                        .with_child("format", PropertyEntry::typed("string"))
                        .with_child("columnWidth", PropertyEntry::typed("number"))
                        .with_child("pivot", PropertyEntry::typed("bool")),
                )
                .setting("refreshData", PropertyEntry::typed("bool"))
                .setting("widgetTransitionEffect", PropertyEntry::typed("string"))
                .method("draw", PropertyEntry::typed("fn()"))
                .method("getData", PropertyEntry::typed("fn(requestId?: string)"))
                .enum_table(
                    "SIZE",
                    &[("SMALL", "string"), ("MEDIUM", "string"), ("LARGE", "string")],
                )
                .enum_table(
                    "POSITION",
                    &[
                        ("BODY", "string"),
                        ("HEADER", "string"),
                        ("FOOTER", "string"),
                        ("BUTTONGROUP", "string"),
                    ],
                ),
        )
        .component(
            "OutputWidget",
            ComponentDefinition::new()
                .with_proto("Widget")
                .property("legendElement", PropertyEntry::untyped())
                .property(
                    "hasHeader",
                    PropertyEntry::typed("bool").with_doc("Widgets with output draw a header"),
                )
                .property("allowExport", PropertyEntry::typed("bool"))
                .setting("outputWidgetHasDownloadButton", PropertyEntry::typed("bool"))
                .method("followLink", PropertyEntry::typed("fn()"))
                .method("download", PropertyEntry::typed("fn(format: string)")),
        )
        .component(
            "Control",
            ComponentDefinition::new()
                .with_proto("DashboardComponent")
                .property("label", PropertyEntry::typed("string"))
                .property(
                    "position",
                    PropertyEntry::typed("string").with_data("Control.POSITION"),
                )
                .enum_table("POSITION", &[("LEFT", "string"), ("RIGHT", "string")]),
        )
        .component(
            "Button",
            ComponentDefinition::new()
                .with_proto("Control")
                .property("imageName", PropertyEntry::typed("string"))
                .property(
                    "size",
                    PropertyEntry::typed("string").with_data("Button.SIZE"),
                )
                .property(
                    "buttonStyle",
                    PropertyEntry::typed("string").with_data("Button.BUTTON_STYLE"),
                )
                .method("press", PropertyEntry::typed("fn()"))
                .enum_table("SIZE", &[("SMALL", "string"), ("LARGE", "string")])
                .enum_table(
                    "BUTTON_STYLE",
                    &[("BUTTON", "string"), ("LINK", "string"), ("IMAGE", "string")],
                ),
        )
        .component(
            "Container",
            ComponentDefinition::new()
                .with_proto("DashboardComponent")
                .property("collapsible", PropertyEntry::typed("bool"))
                .method("toggle", PropertyEntry::typed("fn(show?: bool)")),
        )
        // -------- flat style table ---------------------------------------
        .style_entry(
            "alignContent",
            PropertyEntry::typed("string").with_doc("Alignment between flex lines"),
        )
        .style_entry("alignItems", PropertyEntry::typed("string"))
        .style_entry("animation", PropertyEntry::typed("string"))
        .style_entry("color", PropertyEntry::typed("string"))
        .style_entry("fontSize", PropertyEntry::typed("string"))
        .style_entry("width", PropertyEntry::typed("string"))
        .style_entry("zIndex", PropertyEntry::typed("string"))
        .build()
}
