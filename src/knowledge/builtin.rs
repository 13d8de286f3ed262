// Built-in mental health knowledge entries

use super::KnowledgeEntry;

pub(super) fn entries() -> Vec<KnowledgeEntry> {
    vec![
        KnowledgeEntry::new(
            "stress-general",
            "stress",
            "Stress is the body's response to pressure. Common symptoms include tension, irritability, inability to concentrate, and sleep problems. Coping strategies include deep breathing, regular exercise, and time management.",
            &["stress", "anxiety", "coping", "symptoms"],
        ),
        KnowledgeEntry::new(
            "stress-techniques",
            "stress",
            "Effective stress management techniques include progressive muscle relaxation, guided imagery, and the 4-7-8 breathing technique (inhale for 4 counts, hold for 7, exhale for 8).",
            &["stress", "relaxation", "breathing", "techniques"],
        ),
        KnowledgeEntry::new(
            "anxiety-general",
            "anxiety",
            "Anxiety is characterized by persistent worry and fear. It can manifest physically as increased heart rate, rapid breathing, and restlessness. Grounding techniques can help manage acute anxiety symptoms.",
            &["anxiety", "symptoms", "worry", "fear"],
        ),
        KnowledgeEntry::new(
            "anxiety-techniques",
            "anxiety",
            "Grounding techniques for anxiety include the 5-4-3-2-1 method (acknowledge 5 things you see, 4 things you feel, 3 things you hear, 2 things you smell, and 1 thing you taste).",
            &["anxiety", "grounding", "techniques", "coping"],
        ),
        KnowledgeEntry::new(
            "depression-general",
            "depression",
            "Depression is more than just feeling sad; it involves persistent feelings of sadness, hopelessness, and loss of interest in activities. Physical symptoms may include changes in appetite, sleep problems, and fatigue.",
            &["depression", "sadness", "symptoms", "mood"],
        ),
        KnowledgeEntry::new(
            "depression-help",
            "depression",
            "Depression is treatable. Professional help, such as therapy and sometimes medication, can be very effective. Self-care strategies include regular physical activity, maintaining social connections, and establishing routines.",
            &["depression", "treatment", "therapy", "self-care"],
        ),
        KnowledgeEntry::new(
            "sleep-general",
            "sleep",
            "Quality sleep is essential for mental health. Poor sleep can worsen anxiety and depression symptoms. Adults typically need 7-9 hours of sleep per night.",
            &["sleep", "insomnia", "rest", "health"],
        ),
        KnowledgeEntry::new(
            "sleep-hygiene",
            "sleep",
            "Good sleep hygiene includes maintaining a consistent sleep schedule, creating a restful environment, limiting screen time before bed, and avoiding caffeine and alcohol close to bedtime.",
            &["sleep", "hygiene", "habits", "routine"],
        ),
        KnowledgeEntry::new(
            "disaster-coping",
            "disaster",
            "During and after disasters, it's normal to experience strong emotions. Focus on basic needs first (safety, food, shelter). Establish routines when possible and connect with support systems.",
            &["disaster", "trauma", "crisis", "coping"],
        ),
        KnowledgeEntry::new(
            "grief-process",
            "grief",
            "Grief is a natural response to loss. It can involve a range of emotions including sadness, anger, guilt, and eventually acceptance. There's no \"right\" way to grieve or timeline for healing.",
            &["grief", "loss", "bereavement", "emotions"],
        ),
        KnowledgeEntry::new(
            "mindfulness-basics",
            "mindfulness",
            "Mindfulness involves paying attention to the present moment without judgment. Regular practice can reduce stress, anxiety, and depression symptoms. Start with just a few minutes of focused breathing daily.",
            &["mindfulness", "meditation", "awareness", "present"],
        ),
        KnowledgeEntry::new(
            "self-care-importance",
            "self-care",
            "Self-care isn't selfish; it's necessary for mental health. Basic self-care includes adequate sleep, nutrition, hydration, physical activity, and social connection.",
            &["self-care", "wellness", "health", "balance"],
        ),
        KnowledgeEntry::new(
            "crisis-help",
            "crisis",
            "If you're experiencing thoughts of suicide or severe distress, please contact a crisis hotline immediately. Help is available 24/7, and reaching out is a sign of strength, not weakness.",
            &["crisis", "suicide", "emergency", "hotline"],
        ),
        KnowledgeEntry::new(
            "therapy-types",
            "therapy",
            "Common therapy types include Cognitive Behavioral Therapy (CBT), which helps identify and change negative thought patterns, and Dialectical Behavior Therapy (DBT), which focuses on emotional regulation and mindfulness.",
            &["therapy", "treatment", "CBT", "DBT"],
        ),
        KnowledgeEntry::new(
            "medication-info",
            "medication",
            "Mental health medications can be an important part of treatment for many conditions. They work best when combined with therapy. It's important to take them as prescribed and discuss any concerns with your healthcare provider.",
            &["medication", "treatment", "psychiatry", "antidepressants"],
        ),
    ]
}
