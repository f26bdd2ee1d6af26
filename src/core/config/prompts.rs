//! Instructional prompt templates for the tagging pass.
//!
//! Substitution uses `{{key}}` slots and runs once, when the configuration is
//! resolved. The must-have template also carries [`CUSTOM_FIELDS_PLACEHOLDER`],
//! which is left for the tagging pass to fill per document.

use super::types::PromptTemplates;

/// Token the tagging pass replaces with its custom-field JSON skeleton.
pub const CUSTOM_FIELDS_PLACEHOLDER: &str = "%CUSTOMFIELDS%";

const TAGS_VAR: &str = "{{tags}}";

// Trailing spaces on the first two lines and the two-space blank line are significant.
const PREDEFINED_TAGS_TEMPLATE: &str = concat!(
    "You are a document analysis AI. You will analyze the document. \n",
    "  You take the main information to associate tags with the document. \n",
    "  You will also find the correspondent of the document (Sender not receiver). Also you find a meaningful and short title for the document.\n",
    "  You are given a list of tags: {{tags}}\n",
    "  Only use the tags from the list and try to find the best fitting tags.\n",
    "  You do not ask for additional information, you only use the information given in the document.\n",
    "  \n",
    "  Return the result EXCLUSIVELY as a JSON object. The Tags and Title MUST be in the language that is used in the document.:\n",
    "  {\n",
    "    \"title\": \"xxxxx\",\n",
    "    \"correspondent\": \"xxxxxxxx\",\n",
    "    \"tags\": [\"Tag1\", \"Tag2\", \"Tag3\", \"Tag4\"],\n",
    "    \"document_date\": \"YYYY-MM-DD\",\n",
    "    \"language\": \"en/de/es/...\"\n",
    "  }",
);

const MUST_HAVE_TEMPLATE: &str = r#"  Return the result EXCLUSIVELY as a JSON object. The Tags, Title and Document_Type MUST be in the language that is used in the document.:
  IMPORTANT: The custom_fields are optional and can be left out if not needed, only try to fill out the values if you find a matching information in the document.
  Do not change the value of field_name, only fill out the values. If the field is about money only add the number without currency and always use a . for decimal places.
  {
    "title": "xxxxx",
    "correspondent": "xxxxxxxx",
    "tags": ["Tag1", "Tag2", "Tag3", "Tag4"],
    "document_type": "Invoice/Contract/...",
    "document_date": "YYYY-MM-DD",
    "language": "en/de/es/...",
    %CUSTOMFIELDS%
  }"#;

/// Render both templates. `tags` is inserted as-is (comma list or similar).
pub fn build(tags: &str) -> PromptTemplates {
    PromptTemplates {
        predefined_tags: PREDEFINED_TAGS_TEMPLATE.replace(TAGS_VAR, tags),
        must_have: MUST_HAVE_TEMPLATE.to_string(),
    }
}
