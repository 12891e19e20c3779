use super::ToolRuntime;

impl ToolRuntime {
    /// System instructions: the role persona followed by the directive
    /// protocol and the tool catalogue.
    pub fn compose_system_instructions(&self, persona: &str) -> String {
        let mut lines = Vec::new();
        let persona = persona.trim();
        if !persona.is_empty() {
            lines.push(persona.to_string());
        }

        lines.push(
            "All responses must be valid JSON without commentary or code fences.".to_string(),
        );
        lines.push(
            "When you need to invoke a tool, respond with: {\"action\":\"call_tool\",\"tool\":\"tool_name\",\"input\":{...}}."
                .to_string(),
        );
        lines.push(
            "When you are ready to give the final narration, respond with: {\"action\":\"final\",\"response\":\"...\"}."
                .to_string(),
        );

        let descriptors = self.descriptors();
        if descriptors.is_empty() {
            lines.push("No tools are currently available.".to_string());
        } else {
            lines.push("Available tools:".to_string());
            for descriptor in descriptors {
                let mut line = format!("- {}: {}", descriptor.name, descriptor.description);
                if let Some(hint) = &descriptor.input_hint {
                    let compact = serde_json::to_string(hint).unwrap_or_default();
                    line.push_str(&format!(" Example input: {compact}."));
                }
                lines.push(line);
            }
        }

        lines.join(" ")
    }
}
