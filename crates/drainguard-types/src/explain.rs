//! Explain registry for rules.
//!
//! Maps rule IDs to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a rule.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the rule.
    pub title: &'static str,
    /// What the rule detects and why it matters for graceful shutdown.
    pub description: &'static str,
    /// How to fix violations.
    pub remediation: &'static str,
    /// Before/after examples.
    pub examples: ExamplePair,
}

/// Before and after examples.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Input that would trigger a finding.
    pub before: &'static str,
    /// Input that passes the rule.
    pub after: &'static str,
}

/// Look up an explanation by rule id (case-insensitive).
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    let id = identifier.trim().to_ascii_uppercase();
    match id.as_str() {
        ids::RULE_ENTRYPOINT_SHELL_FORM => Some(explain_entrypoint_shell_form()),
        ids::RULE_CMD_SHELL_FORM => Some(explain_cmd_shell_form()),
        ids::RULE_GRACE_PERIOD_UNSET => Some(explain_grace_period_unset()),
        ids::RULE_MISSING_PRE_STOP => Some(explain_missing_pre_stop()),
        ids::RULE_MISSING_READINESS_PROBE => Some(explain_missing_readiness_probe()),
        _ => None,
    }
}

/// List all known rule IDs.
pub fn all_rule_ids() -> &'static [&'static str] {
    ids::ALL_RULES
}

fn explain_entrypoint_shell_form() -> Explanation {
    Explanation {
        title: "ENTRYPOINT Uses Shell Form",
        description: "\
Detects `ENTRYPOINT` instructions written in shell form (a bare command line).

Shell form runs the command as `/bin/sh -c \"...\"`, which makes the shell PID 1:
- The shell does not forward SIGTERM to its child process
- The orchestrator waits for the full grace period, then sends SIGKILL
- In-flight requests are dropped instead of drained",
        remediation: "\
Rewrite the instruction in exec form (a JSON array of strings):

    ENTRYPOINT [\"node\", \"server.js\"]

If you need shell features such as variable expansion, use `exec` in a wrapper
script so the real process replaces the shell.",
        examples: ExamplePair {
            before: r#"FROM node:20
ENTRYPOINT node server.js"#,
            after: r#"FROM node:20
ENTRYPOINT ["node", "server.js"]"#,
        },
    }
}

fn explain_cmd_shell_form() -> Explanation {
    Explanation {
        title: "CMD Uses Shell Form",
        description: "\
Detects `CMD` instructions written in shell form.

When `CMD` is the process launcher it has the same signal problem as a shell-form
`ENTRYPOINT`. It is reported as a warning because `CMD` is commonly overridden at
run time or only supplies arguments to an exec-form `ENTRYPOINT`.",
        remediation: "\
Prefer exec form:

    CMD [\"python\", \"app.py\"]",
        examples: ExamplePair {
            before: r#"FROM python:3.12
CMD python app.py"#,
            after: r#"FROM python:3.12
CMD ["python", "app.py"]"#,
        },
    }
}

fn explain_grace_period_unset() -> Explanation {
    Explanation {
        title: "Termination Grace Period Not Set",
        description: "\
Detects pod specs without an explicit `terminationGracePeriodSeconds`.

Kubernetes silently applies a 30 second default. Workloads that drain long-lived
connections or flush queues often need more; fast services may want less so that
rollouts are not slowed down. Only the absence of the key is reported: an explicit
value (including `0`) is treated as a deliberate choice.",
        remediation: "\
Set the grace period to the real worst-case shutdown duration of the workload,
including the preStop delay:

    spec:
      terminationGracePeriodSeconds: 60",
        examples: ExamplePair {
            before: r#"spec:
  template:
    spec:
      containers:
        - name: api"#,
            after: r#"spec:
  template:
    spec:
      terminationGracePeriodSeconds: 60
      containers:
        - name: api"#,
        },
    }
}

fn explain_missing_pre_stop() -> Explanation {
    Explanation {
        title: "Container Has No preStop Hook",
        description: "\
Detects containers without a `lifecycle.preStop` hook.

Endpoint removal and SIGTERM happen concurrently. Without a short preStop delay,
the process may stop accepting connections before kube-proxy and ingress
controllers have stopped routing traffic to the pod.",
        remediation: "\
Add a preStop hook that sleeps long enough for endpoint removal to propagate:

    lifecycle:
      preStop:
        exec:
          command: [\"sh\", \"-c\", \"sleep 5\"]",
        examples: ExamplePair {
            before: r#"containers:
  - name: api
    image: myapp:1.0"#,
            after: r#"containers:
  - name: api
    image: myapp:1.0
    lifecycle:
      preStop:
        exec:
          command: ["sh", "-c", "sleep 5"]"#,
        },
    }
}

fn explain_missing_readiness_probe() -> Explanation {
    Explanation {
        title: "Container Has No readinessProbe",
        description: "\
Detects containers without a `readinessProbe`.

The readiness probe is how a terminating pod signals that it should no longer
receive traffic. Without it the endpoint stays in the Service until the pod is
gone, so requests keep arriving while the process shuts down.",
        remediation: "\
Add a readiness probe that fails once the application starts shutting down:

    readinessProbe:
      httpGet:
        path: /healthz
        port: 8080",
        examples: ExamplePair {
            before: r#"containers:
  - name: api
    image: myapp:1.0"#,
            after: r#"containers:
  - name: api
    image: myapp:1.0
    readinessProbe:
      httpGet:
        path: /healthz
        port: 8080"#,
        },
    }
}
