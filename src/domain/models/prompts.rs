//! Prompt templates for the consultation operations.
//!
//! Every builder here is a pure function of its inputs: the same arguments
//! always produce byte-identical messages, and each input appears verbatim in
//! the output.

/// Persona shared by the four consultation tools.
pub const ARCHITECT_SYSTEM_PROMPT: &str = "\
You are an elite software architecture consultant specializing in enterprise-grade system design, \
scalability patterns, security architecture, and technical decision-making.

Your expertise includes:
- Distributed systems architecture and microservices design
- Cloud-native patterns and containerization strategies
- Database architecture and data modeling
- API design (REST, GraphQL, gRPC)
- Security architecture and threat modeling
- Performance optimization and scalability
- DevOps and CI/CD pipeline architecture
- Modern frontend and backend frameworks
- System integration patterns

Provide concise, actionable architectural guidance with enterprise-grade best practices. \
Focus on technical accuracy, scalability, maintainability, and security.";

/// User message for a general consultation. Empty context counts as absent.
pub fn consultation_message(query: &str, context: Option<&str>) -> String {
    match context.filter(|c| !c.is_empty()) {
        Some(context) => format!("Context:\n{context}\n\nArchitectural Query:\n{query}"),
        None => query.to_string(),
    }
}

pub fn code_analysis_query(code: &str, language: &str, question: &str) -> String {
    format!(
        "Analyze the following {language} code from an architectural perspective:\n\
         \n\
         ```{language}\n\
         {code}\n\
         ```\n\
         \n\
         Architectural Question: {question}\n\
         \n\
         Provide analysis covering:\n\
         1. Architectural patterns used\n\
         2. Design principles adherence (SOLID, DRY, KISS)\n\
         3. Scalability considerations\n\
         4. Security implications\n\
         5. Recommended improvements"
    )
}

pub fn system_design_query(requirements: &str) -> String {
    format!(
        "Design a system architecture based on the following requirements:\n\
         \n\
         {requirements}\n\
         \n\
         Provide:\n\
         1. High-level architecture diagram description\n\
         2. Component breakdown and responsibilities\n\
         3. Data flow and communication patterns\n\
         4. Technology stack recommendations\n\
         5. Scalability and deployment strategy\n\
         6. Security architecture considerations"
    )
}

pub fn decision_review_query(decision: &str, context: &str) -> String {
    format!(
        "Review the following technical decision:\n\
         \n\
         Decision: {decision}\n\
         \n\
         Context: {context}\n\
         \n\
         Provide:\n\
         1. Architectural impact assessment\n\
         2. Trade-offs analysis\n\
         3. Alternative approaches\n\
         4. Risk evaluation\n\
         5. Recommendation with justification"
    )
}

pub fn advanced_reasoning_prompt(task: &str, context: &str, expected_outcome: &str) -> String {
    format!(
        "<task_specification>\n\
         You are an elite computational mathematician and algorithm architect. Your mission is to \
         deliver innovative solutions using rigorous scientific methodology.\n\
         </task_specification>\n\
         \n\
         <problem_context>\n{context}\n</problem_context>\n\
         \n\
         <primary_task>\n{task}\n</primary_task>\n\
         \n\
         <expected_outcome>\n{expected_outcome}\n</expected_outcome>\n\
         \n\
         {REASONING_REQUIREMENTS}"
    )
}

const REASONING_REQUIREMENTS: &str = "\
<execution_requirements>
1. MATHEMATICAL RIGOR: Apply formal proofs, complexity analysis, and theoretical foundations
2. ALGORITHMIC EXCELLENCE: Design optimal algorithms with detailed time/space complexity analysis
3. INNOVATION: Present approaches beyond conventional solutions
4. ENTERPRISE QUALITY: Ensure production-grade implementation readiness
5. PERFORMANCE OPTIMIZATION: Focus on efficiency and scalability
6. SCIENTIFIC METHOD: Use data-driven analysis with quantitative reasoning
</execution_requirements>

<response_structure>
Structure your response using tagged sections:

<analysis>
- Problem decomposition
- Mathematical formulation
- Complexity analysis
- Constraint identification
</analysis>

<solution_design>
- Core algorithm/approach
- Innovation highlights
- Optimization strategies
- Scalability considerations
</solution_design>

<implementation_blueprint>
- Pseudocode with annotations
- Key implementation patterns
- Performance characteristics
- Edge case handling
</implementation_blueprint>

<validation_strategy>
- Correctness proofs
- Test scenarios
- Benchmark expectations
- Quality metrics
</validation_strategy>

<production_guidance>
- Integration recommendations
- Monitoring strategies
- Maintenance considerations
- Documentation requirements
</production_guidance>
</response_structure>

<quality_standards>
- Approach: Research-grade rigor
- Output: Production-ready
</quality_standards>

Deliver a comprehensive, scientifically rigorous solution.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consultation_without_context_is_query_only() {
        let msg = consultation_message("How should I shard my database?", None);
        assert_eq!(msg, "How should I shard my database?");
    }

    #[test]
    fn test_consultation_with_context_prefix() {
        let msg = consultation_message("How should I shard my database?", Some("10M users"));
        assert!(msg.starts_with(
            "Context:\n10M users\n\nArchitectural Query:\nHow should I shard my database?"
        ));
    }

    #[test]
    fn test_empty_context_is_ignored() {
        assert_eq!(consultation_message("q", Some("")), "q");
    }

    #[test]
    fn test_code_analysis_fences_code_with_language() {
        let msg = code_analysis_query("fn main() {}", "rust", "Is this layered?");
        assert!(msg.contains("```rust\nfn main() {}\n```"));
        assert!(msg.contains("Analyze the following rust code"));
        assert!(msg.contains("Architectural Question: Is this layered?"));
        assert!(msg.contains("5. Recommended improvements"));
    }

    #[test]
    fn test_system_design_lists_six_deliverables() {
        let msg = system_design_query("A ride-sharing backend");
        assert!(msg.contains("\n\nA ride-sharing backend\n\n"));
        assert!(msg.contains("1. High-level architecture diagram description"));
        assert!(msg.contains("6. Security architecture considerations"));
    }

    #[test]
    fn test_decision_review_includes_decision_and_context() {
        let msg = decision_review_query("Adopt Kafka", "Three teams, 2k msg/s");
        assert!(msg.contains("Decision: Adopt Kafka"));
        assert!(msg.contains("Context: Three teams, 2k msg/s"));
        assert!(msg.ends_with("5. Recommendation with justification"));
    }

    #[test]
    fn test_advanced_reasoning_tags_inputs() {
        let msg = advanced_reasoning_prompt("Find a schedule", "100 jobs", "Optimal makespan");
        assert!(msg.contains("<problem_context>\n100 jobs\n</problem_context>"));
        assert!(msg.contains("<primary_task>\nFind a schedule\n</primary_task>"));
        assert!(msg.contains("<expected_outcome>\nOptimal makespan\n</expected_outcome>"));
        assert!(msg.contains("<execution_requirements>"));
    }
}
