//! Canned template registry content for integration tests.

pub const BASH_TEMPLATE: &str = "#!/usr/bin/env bash\n\
# {{TITLE}}\n\
#\n\
# GIVEN: {{GIVEN}}\n\
# WHEN:  {{WHEN}}\n\
# THEN:  {{THEN}}\n\
\n\
CHECK_ID=\"{{CHECK_ID}}\"\n\
\n\
# TODO: replace the placeholder logic below with the real verification\n\
echo \"PASS|${CHECK_ID}|placeholder check passed|{{COMMAND_HINT}}\"\n";

pub const POWERSHELL_TEMPLATE: &str = "# {{TITLE}}\n\
#\n\
# GIVEN: {{GIVEN}}\n\
# WHEN:  {{WHEN}}\n\
# THEN:  {{THEN}}\n\
\n\
$CheckId = \"{{CHECK_ID}}\"\n\
Write-Output \"PASS|$CheckId|placeholder check passed|{{COMMAND_HINT}}\"\n";

pub const REGISTRY_JSON: &str = r#"{
  "version": 1,
  "templates": [
    {
      "id": "bash-default",
      "label": "Bash check",
      "description": "Standard bash check skeleton",
      "interpreter": "bash",
      "extension": "sh",
      "path": "bash-default.sh.tmpl",
      "categories": [],
      "placeholders": ["TITLE", "GIVEN", "WHEN", "THEN", "CHECK_ID", "COMMAND_HINT"]
    },
    {
      "id": "powershell-default",
      "label": "PowerShell check",
      "description": "Standard PowerShell check skeleton",
      "interpreter": "powershell",
      "extension": "ps1",
      "path": "powershell-default.ps1.tmpl",
      "categories": [],
      "placeholders": ["TITLE", "GIVEN", "WHEN", "THEN", "CHECK_ID", "COMMAND_HINT"]
    }
  ]
}
"#;
