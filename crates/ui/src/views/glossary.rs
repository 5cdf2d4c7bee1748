use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::quiz::{DefinitionList, ReferenceCard};
use crate::vm::map_definitions;

#[component]
pub fn GlossaryView() -> Element {
    let ctx = use_context::<AppContext>();
    let definitions = map_definitions(&ctx.catalog(), None);

    rsx! {
        section { class: "glossary",
            h2 { "Bias Type Definitions" }
            DefinitionList { definitions }
            ReferenceCard {}
        }
    }
}
