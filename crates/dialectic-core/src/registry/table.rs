//! # Generated Registry Table
//!
//! GENERATED FILE. DO NOT EDIT.
//!
//! One record per exported IR aggregate in the content corpus. Keys are
//! derived as `module#export`.

use super::RegistryRecord;

pub(super) const GENERATED_RECORDS: &[RegistryRecord] = &[
    RegistryRecord {
        id: "absolute-indifference-ir",
        title: "Absolute Indifference IR",
        section: "BEING - MEASURE - C. Becoming of Essence - Absolute Indifference",
        module: "@relative/being/measure/becoming-essence/absolute-indifference-ir",
        export: "absoluteIndifferenceIR",
    },
    RegistryRecord {
        id: "indifference-inverse-ratio-ir",
        title: "Indifference and Inverse Ratio IR",
        section: "BEING - MEASURE - C. Becoming of Essence - Indifference and Inverse Ratio",
        module: "@relative/being/measure/becoming-essence/indifference-inverse-ratio-ir",
        export: "indifferenceInverseRatioIR",
    },
    RegistryRecord {
        id: "transition-essence-ir",
        title: "Transition Essence IR",
        section: "BEING - MEASURE - C. Becoming of Essence - Transition into Essence",
        module: "@relative/being/measure/becoming-essence/transition-essence-ir",
        export: "transitionEssenceIR",
    },
    RegistryRecord {
        id: "measureless-ir",
        title: "Measureless IR: Progressive Determination",
        section: "BEING - MEASURE - B. Real Measure - The Measureless",
        module: "@relative/being/measure/real-measure/measureless-ir",
        export: "measurelessIR",
    },
    RegistryRecord {
        id: "measures-ir",
        title: "Measures IR: Relation of Independent Measures",
        section: "BEING - MEASURE - B. Real Measure - The Relation of Independent Measures",
        module: "@relative/being/measure/real-measure/measures-ir",
        export: "measuresIR",
    },
    RegistryRecord {
        id: "nodal-lines-ir",
        title: "Nodal Lines IR: Measure-Relations and Leaps",
        section: "BEING - MEASURE - B. Real Measure - Nodal Lines",
        module: "@relative/being/measure/real-measure/nodal-lines-ir",
        export: "nodalLinesIR",
    },
    RegistryRecord {
        id: "specific-quantity-ir",
        title: "Specific Quantity IR: Being-for-itself in Measure",
        section: "BEING - MEASURE - C. The Being-for-Itself in Measure",
        module: "@relative/being/measure/specific-quantity/specific-quantity-ir",
        export: "specificQuantityIR",
    },
    RegistryRecord {
        id: "specific-quantum-ir",
        title: "Specific Quantum IR: Immediate Measure Dynamics",
        section: "BEING - MEASURE - A. The Specific Quantum",
        module: "@relative/being/measure/specific-quantity/specific-quantum-ir",
        export: "specificQuantumIR",
    },
    RegistryRecord {
        id: "specifying-measure-ir",
        title: "Specifying Measure IR: Rule and Exponent",
        section: "BEING - MEASURE - B. Specifying Measure",
        module: "@relative/being/measure/specific-quantity/specifying-measure-ir",
        export: "specifyingMeasureIR",
    },
    RegistryRecord {
        id: "attraction-ir",
        title: "Attraction IR: Exclusion, Attraction, and Their Unity",
        section: "BEING - QUALITY - C. Being-for-Self - C. Repulsion and Attraction",
        module: "@relative/being/quality/being-for-self/attraction-ir",
        export: "attractionIR",
    },
    RegistryRecord {
        id: "being-for-self-ir",
        title: "Being-for-Self IR: Self-Reference, Being-for-One, The One",
        section: "BEING - QUALITY - C. Being-for-Self",
        module: "@relative/being/quality/being-for-self/being-for-self-ir",
        export: "beingForSelfIR",
    },
    RegistryRecord {
        id: "one-many-ir",
        title: "One and Many IR: One, Void, Repulsion, Attraction",
        section: "BEING - QUALITY - C. Being-for-Self - B. One and Many",
        module: "@relative/being/quality/being-for-self/one-many-ir",
        export: "oneManyIR",
    },
    RegistryRecord {
        id: "becoming-ir",
        title: "Becoming IR: Unity of Being and Nothing",
        section: "BEING - QUALITY - C. Becoming",
        module: "@relative/being/quality/being/becoming-ir",
        export: "becomingIR",
    },
    RegistryRecord {
        id: "being-ir",
        title: "Being IR: Pure Being",
        section: "BEING - QUALITY - A. Being",
        module: "@relative/being/quality/being/being-ir",
        export: "beingIR",
    },
    RegistryRecord {
        id: "nothing-ir",
        title: "Nothing IR: Pure Nothing",
        section: "BEING - QUALITY - B. Nothing",
        module: "@relative/being/quality/being/nothing-ir",
        export: "nothingIR",
    },
    RegistryRecord {
        id: "affirmative-infinity-ir",
        title: "Affirmative Infinity IR: Unity, True Infinite as Becoming, True Infinite as Being",
        section: "I. BEING - A. QUALITY - C. Infinity - C. Affirmative Infinity",
        module: "@relative/being/quality/existence/affirmative-infinity-ir",
        export: "affirmativeInfinityIR",
    },
    RegistryRecord {
        id: "alternating-infinity-ir",
        title: "Alternating Infinity IR: Bad Infinite, Contradiction, Progress to Infinity",
        section: "I. BEING - A. QUALITY - C. Infinity - B. Alternating Determination",
        module: "@relative/being/quality/existence/alternating-infinity-ir",
        export: "alternatingInfinityIR",
    },
    RegistryRecord {
        id: "constitution-ir",
        title: "Constitution IR: Determination, Constitution, and Limit",
        section: "BEING - QUALITY - B. Finitude - b. Determination, Constitution, and Limit",
        module: "@relative/being/quality/existence/constitution-ir",
        export: "constitutionIR",
    },
    RegistryRecord {
        id: "existence-chapter-ir",
        title: "Existence Chapter IR: Existence, Finitude, and Infinity",
        section: "BEING - QUALITY - EXISTENCE CHAPTER",
        module: "@relative/being/quality/existence/existence-chapter-ir",
        export: "existenceChapterIR",
    },
    RegistryRecord {
        id: "existence-ir",
        title: "Existence IR: Determinate Existence as Such",
        section: "BEING - QUALITY - A. Existence as Such",
        module: "@relative/being/quality/existence/existence-ir",
        export: "existenceIR",
    },
    RegistryRecord {
        id: "finitude-ir",
        title: "Finitude IR: Restriction, Ought, and Transition to Infinite",
        section: "BEING - QUALITY - B. Finitude - c. Finitude",
        module: "@relative/being/quality/existence/finitude-ir",
        export: "finitudeIR",
    },
    RegistryRecord {
        id: "infinity-ir",
        title: "Infinity IR: Infinite in General",
        section: "BEING - QUALITY - C. Infinity - a. The Infinite in General",
        module: "@relative/being/quality/existence/infinity-ir",
        export: "infinityIR",
    },
    RegistryRecord {
        id: "something-and-other-ir",
        title: "Something and Other IR: Relational Finitude",
        section: "BEING - QUALITY - B. Finitude - a. Something and Other",
        module: "@relative/being/quality/existence/something-and-other-ir",
        export: "somethingAndOtherIR",
    },
    RegistryRecord {
        id: "quality-ir",
        title: "Quality IR: Being, Existence, and Being-for-itself",
        section: "BEING - QUALITY",
        module: "@relative/being/quality/integrated-topicmap-ir",
        export: "integratedTopicMapIR",
    },
    RegistryRecord {
        id: "quality-ir",
        title: "Quality IR: Being, Existence, and Being-for-itself",
        section: "BEING - QUALITY",
        module: "@relative/being/quality/quality-ir",
        export: "qualityIR",
    },
    RegistryRecord {
        id: "limiting-quantity-ir",
        title: "Limiting Quantity IR: Quantum Threshold",
        section: "BEING - QUANTITY - C. Limiting Quantity",
        module: "@relative/being/quantity/quantity/limiting-quantity-ir",
        export: "limitingQuantityIR",
    },
    RegistryRecord {
        id: "magnitude-ir",
        title: "Magnitude IR: Continuous and Discrete Magnitude",
        section: "BEING - QUANTITY - B. Continuous and Discrete Magnitude",
        module: "@relative/being/quantity/quantity/magnitude-ir",
        export: "magnitudeIR",
    },
    RegistryRecord {
        id: "pure-quantity-ir",
        title: "Pure Quantity IR: Continuity and Discreteness",
        section: "BEING - QUANTITY - A. Pure Quantity",
        module: "@relative/being/quantity/quantity/pure-quantity-ir",
        export: "pureQuantityIR",
    },
    RegistryRecord {
        id: "infinity-ir",
        title: "Infinity IR: Quantitative Infinity and Return to Quality",
        section: "BEING - QUANTITY - D. Quantitative Infinity",
        module: "@relative/being/quantity/quantum/infinity-ir",
        export: "infinityIR",
    },
    RegistryRecord {
        id: "number-ir",
        title: "Number IR: Quantum as Number",
        section: "BEING - QUANTITY - A. Number",
        module: "@relative/being/quantity/quantum/number-ir",
        export: "numberIR",
    },
    RegistryRecord {
        id: "quantum-ir",
        title: "Quantum IR: Extensive and Intensive Quantum",
        section: "BEING - QUANTITY - C. Quantum",
        module: "@relative/being/quantity/quantum/quantum-ir",
        export: "quantumIR",
    },
    RegistryRecord {
        id: "inverse-ir",
        title: "Inverse IR: The Inverse Ratio",
        section: "BEING - QUANTITY - D. Inverse Ratio",
        module: "@relative/being/quantity/ratio/inverse-ir",
        export: "inverseIR",
    },
    RegistryRecord {
        id: "powers-ir",
        title: "Powers IR: Ratio of Powers and Transition to Measure",
        section: "BEING - QUANTITY - D. Ratio of Powers",
        module: "@relative/being/quantity/ratio/powers-ir",
        export: "powersIR",
    },
    RegistryRecord {
        id: "ratio-ir",
        title: "Ratio IR: Quantitative Relation",
        section: "BEING - QUANTITY - D. Ratio",
        module: "@relative/being/quantity/ratio/ratio-ir",
        export: "ratioIR",
    },
    RegistryRecord {
        id: "cognition-ir",
        title: "Cognition IR: General Cognition, Theoretical Truth, Spirit Threshold",
        section: "CONCEPT - IDEA - B. Cognition - 1. Introduction",
        module: "@relative/concept/idea/cognition/cognition-ir",
        export: "cognitionIR",
    },
    RegistryRecord {
        id: "idea-of-the-good-ir",
        title: "Idea of the Good IR: Practical Good, Ought, Absolute Transition",
        section: "CONCEPT - IDEA - B. Cognition - 3. The Idea of the Good",
        module: "@relative/concept/idea/cognition/idea-of-the-good-ir",
        export: "ideaOfTheGoodIR",
    },
    RegistryRecord {
        id: "idea-of-the-true-ir",
        title: "Idea of the True IR: Impulse, Synthetic Method, Practical Transition",
        section: "CONCEPT - IDEA - B. Cognition - 2. The Idea of the True",
        module: "@relative/concept/idea/cognition/idea-of-the-true-ir",
        export: "ideaOfTheTrueIR",
    },
    RegistryRecord {
        id: "genus-ir",
        title: "Genus IR: Identity/Duplication, Propagation, Transition to Cognition",
        section: "CONCEPT - IDEA - A. Life - C. The Genus",
        module: "@relative/concept/idea/life/genus-ir",
        export: "genusIR",
    },
    RegistryRecord {
        id: "life-process-ir",
        title: "Life-Process IR: Need/Pain, Assimilation, Genus Threshold",
        section: "CONCEPT - IDEA - A. Life - B. The Life-Process",
        module: "@relative/concept/idea/life/life-process-ir",
        export: "lifeProcessIR",
    },
    RegistryRecord {
        id: "living-individual-ir",
        title: "Living Individual IR: Immediate Life, Organism, Internal Process",
        section: "CONCEPT - IDEA - A. Life - A. The Living Individual",
        module: "@relative/concept/idea/life/living-individual-ir",
        export: "livingIndividualIR",
    },
    RegistryRecord {
        id: "absolute-idea-ir",
        title: "Absolute Idea IR: Identity, Method, Liberation",
        section: "CONCEPT - IDEA - C. Speculation - A. The Absolute Idea",
        module: "@relative/concept/idea/speculation/absolute-idea-ir",
        export: "absoluteIdeaIR",
    },
    RegistryRecord {
        id: "method-advance-ir",
        title: "Method Advance IR: Dialectical Movement, Third, Circle",
        section: "CONCEPT - IDEA - C. Speculation - B. Method - 2. The Advance",
        module: "@relative/concept/idea/speculation/method-advance-ir",
        export: "methodAdvanceIR",
    },
    RegistryRecord {
        id: "method-beginning-ir",
        title: "Method Beginning IR: Immediate Universal, Deficiency, Concrete Germ",
        section: "CONCEPT - IDEA - C. Speculation - B. Method - 1. The Beginning",
        module: "@relative/concept/idea/speculation/method-beginning-ir",
        export: "methodBeginningIR",
    },
    RegistryRecord {
        id: "chemism-ir",
        title: "Chemism IR: First Negation, Staged Sublation, Purpose",
        section: "CONCEPT - OBJECTIVITY - B. Chemism - C. Transition of Chemism",
        module: "@relative/concept/object/chemism/chemism-ir",
        export: "chemismIR",
    },
    RegistryRecord {
        id: "chemical-object-ir",
        title: "Chemical Object IR: Non-Indifference, Totality, Process Bridge",
        section: "CONCEPT - OBJECTIVITY - B. Chemism - A. The Chemical Object",
        module: "@relative/concept/object/chemism/object-ir",
        export: "chemicalObjectIR",
    },
    RegistryRecord {
        id: "chemical-process-ir",
        title: "Chemical Process IR: Affinity, Neutrality, Self-Sublation",
        section: "CONCEPT - OBJECTIVITY - B. Chemism - B. The Process",
        module: "@relative/concept/object/chemism/process-ir",
        export: "chemicalProcessIR",
    },
    RegistryRecord {
        id: "mechanism-ir",
        title: "Mechanism IR: Center, Free Law, Chemism Bridge",
        section: "CONCEPT - OBJECTIVITY - A. Mechanism - C. Absolute Mechanism",
        module: "@relative/concept/object/mechanism/mechanism-ir",
        export: "mechanismIR",
    },
    RegistryRecord {
        id: "mechanical-object-ir",
        title: "Mechanical Object IR: Equilibrium, Plurality, Process Transition",
        section: "CONCEPT - OBJECTIVITY - A. Mechanism - A. The Mechanical Object",
        module: "@relative/concept/object/mechanism/object-ir",
        export: "mechanicalObjectIR",
    },
    RegistryRecord {
        id: "mechanical-process-ir",
        title: "Mechanical Process IR: Formal Cycle, Real Opposition, Lawful Product",
        section: "CONCEPT - OBJECTIVITY - A. Mechanism - B. The Mechanical Process",
        module: "@relative/concept/object/mechanism/process-ir",
        export: "mechanicalProcessIR",
    },
    RegistryRecord {
        id: "means-ir",
        title: "Means IR: Formal Middle, Mechanical Means, Realization Bridge",
        section: "CONCEPT - OBJECTIVITY - C. Teleology - B. The Means",
        module: "@relative/concept/object/teleology/means-ir",
        export: "meansIR",
    },
    RegistryRecord {
        id: "realized-purpose-ir",
        title: "Realized Purpose IR: Dominated Mechanism, External Limit, Objective Identity",
        section: "CONCEPT - OBJECTIVITY - C. Teleology - C. The Realized Purpose",
        module: "@relative/concept/object/teleology/realized-ir",
        export: "realizedPurposeIR",
    },
    RegistryRecord {
        id: "teleology-ir",
        title: "Teleology IR: Rediscovered Purpose, Finitude, Means Bridge",
        section: "CONCEPT - OBJECTIVITY - C. Teleology - A. Subjective Purpose",
        module: "@relative/concept/object/teleology/teleology-ir",
        export: "teleologyIR",
    },
    RegistryRecord {
        id: "particular-ir",
        title: "Particular IR: Immanent Determinateness, Division, Singularity Transition",
        section: "CONCEPT - SUBJECTIVITY - A. The Concept - 2. The Particular",
        module: "@relative/concept/subject/concept/particular-ir",
        export: "particularIR",
    },
    RegistryRecord {
        id: "singular-ir",
        title: "Singular IR: Posited Singularity, Indissoluble Unity, Judgment Transition",
        section: "CONCEPT - SUBJECTIVITY - A. The Concept - 3. The Singular",
        module: "@relative/concept/subject/concept/singular-ir",
        export: "singularIR",
    },
    RegistryRecord {
        id: "universal-ir",
        title: "Universal IR: Pure Concept, Creative Universality, Self-Differentiation",
        section: "CONCEPT - SUBJECTIVITY - A. The Concept - 1. The Universal",
        module: "@relative/concept/subject/concept/universal-ir",
        export: "universalIR",
    },
    RegistryRecord {
        id: "concept-judgment-ir",
        title: "Concept Judgment IR (Fourth Moment): Ought, Apodictic Truth, Idea Bridge",
        section: "CONCEPT - SUBJECTIVITY - B. Judgment - D. Judgment of the Concept (Idea Bridge)",
        module: "@relative/concept/subject/judgment/concept-ir",
        export: "conceptJudgmentIR",
    },
    RegistryRecord {
        id: "existence-ir",
        title: "Existence Judgment IR: Immediate Truth, Negative Truth, Reflection Transition",
        section: "CONCEPT - SUBJECTIVITY - B. Judgment - A. Judgment of Existence",
        module: "@relative/concept/subject/judgment/existence-ir",
        export: "existenceIR",
    },
    RegistryRecord {
        id: "necessity-ir",
        title: "Necessity Judgment IR: Objective Universality, Disjunction, Concept Transition",
        section: "CONCEPT - SUBJECTIVITY - B. Judgment - C. Judgment of Necessity",
        module: "@relative/concept/subject/judgment/necessity-ir",
        export: "necessityIR",
    },
    RegistryRecord {
        id: "reflection-ir",
        title: "Reflection Judgment IR: Subsumption, Allness, Necessity Transition",
        section: "CONCEPT - SUBJECTIVITY - B. Judgment - B. Judgment of Reflection",
        module: "@relative/concept/subject/judgment/reflection-ir",
        export: "reflectionIR",
    },
    RegistryRecord {
        id: "existence-syllogism-ir",
        title: "Existence Syllogism IR: Immediate Form, Figure Development, Reflection Handoff",
        section: "CONCEPT - SUBJECTIVITY - C. Syllogism - A. Syllogism of Existence",
        module: "@relative/concept/subject/syllogism/existence-ir",
        export: "existenceSyllogismIR",
    },
    RegistryRecord {
        id: "necessity-syllogism-ir",
        title: "Necessity Syllogism IR (Bridge): Categorical, Hypothetical, Objectivity Handoff",
        section: "CONCEPT - SUBJECTIVITY - C. Syllogism - C. Syllogism of Necessity (Objectivity Bridge)",
        module: "@relative/concept/subject/syllogism/necessity-ir",
        export: "necessitySyllogismIR",
    },
    RegistryRecord {
        id: "reflection-syllogism-ir",
        title: "Reflection Syllogism IR: Allness, Induction/Analogy, Necessity Handoff",
        section: "CONCEPT - SUBJECTIVITY - C. Syllogism - B. Syllogism of Reflection",
        module: "@relative/concept/subject/syllogism/reflection-ir",
        export: "reflectionSyllogismIR",
    },
    RegistryRecord {
        id: "attribute-ir",
        title: "Attribute IR: Relative Absolute, Identity Determination, Form Nullity",
        section: "ESSENCE - C. ACTUALITY - C. The Absolute - b. The Attribute",
        module: "@relative/essence/actuality/absolute/attribute-ir",
        export: "attributeIR",
    },
    RegistryRecord {
        id: "exposition-ir",
        title: "Exposition IR: Absolute Unity, Negative/Positive Exposition, Relative Absolute",
        section: "ESSENCE - C. ACTUALITY - C. The Absolute - a. The Exposition",
        module: "@relative/essence/actuality/absolute/exposition-ir",
        export: "expositionIR",
    },
    RegistryRecord {
        id: "mode-ir",
        title: "Mode IR: Externality Posited, Immanent Turning Back, Absolute Manifestation",
        section: "ESSENCE - C. ACTUALITY - C. The Absolute - c. The Mode",
        module: "@relative/essence/actuality/absolute/mode-ir",
        export: "modeIR",
    },
    RegistryRecord {
        id: "absolute-necessity-ir",
        title: "Absolute Necessity IR: Determinate Necessity, Truth, Substance Transition",
        section: "ESSENCE - C. ACTUALITY - C. Absolute Necessity",
        module: "@relative/essence/actuality/actuality/absolute-necessity-ir",
        export: "absoluteNecessityIR",
    },
    RegistryRecord {
        id: "contingency-ir",
        title: "Contingency IR: Formal Actuality, Groundless/Grounded Unity, Necessity",
        section: "ESSENCE - C. ACTUALITY - A. Contingency",
        module: "@relative/essence/actuality/actuality/contingency-ir",
        export: "contingencyIR",
    },
    RegistryRecord {
        id: "relative-necessity-ir",
        title: "Relative Necessity IR: Real Actuality, Condition Completion, Presupposed Necessity",
        section: "ESSENCE - C. ACTUALITY - B. Actuality - Relative Necessity",
        module: "@relative/essence/actuality/actuality/relative-necessity-ir",
        export: "relativeNecessityIR",
    },
    RegistryRecord {
        id: "reciprocity-action-ir",
        title: "Reciprocity Action IR: Mechanism Sublation, Freedom, Concept Triad",
        section: "ESSENCE - C. ACTUALITY - Absolute Relation - c. Reciprocity of Action",
        module: "@relative/essence/actuality/substance/reciprocity-action-ir",
        export: "reciprocityActionIR",
    },
    RegistryRecord {
        id: "relation-causality-ir",
        title: "Relation Causality IR: Formal Causality, Extinguishing, Reciprocity Passover",
        section: "ESSENCE - C. ACTUALITY - Absolute Relation - b. Causality",
        module: "@relative/essence/actuality/substance/relation-causality-ir",
        export: "relationCausalityIR",
    },
    RegistryRecord {
        id: "relation-substantiality-ir",
        title: "Relation Substantiality IR: Substance, Power, Causal Passover",
        section: "ESSENCE - C. ACTUALITY - Absolute Relation - a. Substantiality",
        module: "@relative/essence/actuality/substance/relation-substantiality-ir",
        export: "relationSubstantialityIR",
    },
    RegistryRecord {
        id: "force-expression-ir",
        title: "Force-Expression IR: Force, Solicitation, Infinity",
        section: "B. APPEARANCE - 3. Essential Relation - c. Force and Expression",
        module: "@relative/essence/appearance/relation/force-expression-ir",
        export: "forceExpressionIR",
    },
    RegistryRecord {
        id: "outer-inner-ir",
        title: "Outer-Inner IR: One Identity, Immediate Conversion, Actuality",
        section: "B. APPEARANCE - 3. Essential Relation - b. Outer and Inner",
        module: "@relative/essence/appearance/relation/outer-inner-ir",
        export: "outerInnerIR",
    },
    RegistryRecord {
        id: "whole-parts-ir",
        title: "Whole-Parts IR: Essential Relation, Reciprocal Conditioning, Tautology",
        section: "B. APPEARANCE - 3. Essential Relation - a. Whole and Parts",
        module: "@relative/essence/appearance/relation/whole-parts-ir",
        export: "wholePartsIR",
    },
    RegistryRecord {
        id: "dissolution-ir",
        title: "Dissolution IR: Absolute Porosity, Interpenetration, Appearance",
        section: "B. APPEARANCE - 1. The Thing - c. Dissolution",
        module: "@relative/essence/appearance/thing/dissolution-ir",
        export: "dissolutionIR",
    },
    RegistryRecord {
        id: "matter-ir",
        title: "Matter IR: Property to Matter, Porous Matter",
        section: "B. APPEARANCE - 1. The Thing - b. Matter",
        module: "@relative/essence/appearance/thing/matter-ir",
        export: "matterIR",
    },
    RegistryRecord {
        id: "thing-ir",
        title: "Thing IR: Concrete Existence, Thing-in-Itself, Property",
        section: "ESSENCE - B. APPEARANCE - A. THE THING",
        module: "@relative/essence/appearance/thing/thing-ir",
        export: "thingIR",
    },
    RegistryRecord {
        id: "disappearance-ir",
        title: "Disappearance IR: Opposition, Law Realized, World Foundered",
        section: "B. APPEARANCE - 2. The World - c. Dissolution of Appearance",
        module: "@relative/essence/appearance/world/disappearance-ir",
        export: "disappearanceIR",
    },
    RegistryRecord {
        id: "law-ir",
        title: "Law IR: Appearance, Law, Kingdom of Laws",
        section: "B. APPEARANCE - 2. The World - b. Law of Appearance",
        module: "@relative/essence/appearance/world/law-ir",
        export: "lawIR",
    },
    RegistryRecord {
        id: "world-ir",
        title: "World IR: Kingdom of Laws, Suprasensible World, Opposition",
        section: "B. APPEARANCE - 2. The World - a. World-In-Itself",
        module: "@relative/essence/appearance/world/world-ir",
        export: "worldIR",
    },
    RegistryRecord {
        id: "essence-ir",
        title: "Essence IR: Truth of Being, Absolute Negativity, Reflection",
        section: "ESSENCE - A. ESSENCE AS REFLECTION WITHIN ITSELF",
        module: "@relative/essence/reflection/essence/essence-ir",
        export: "essenceIR",
    },
    RegistryRecord {
        id: "reflection-ir",
        title: "Reflection IR: Essence as Reflection, Positing, External, Determining",
        section: "A. ESSENCE AS REFLECTION WITHIN ITSELF - 2. Reflection",
        module: "@relative/essence/reflection/essence/reflection-ir",
        export: "reflectionIR",
    },
    RegistryRecord {
        id: "shine-ir",
        title: "Shine IR: Being as Shine and Infinite Determinateness",
        section: "A. ESSENCE AS REFLECTION WITHIN ITSELF - 1. Shine",
        module: "@relative/essence/reflection/essence/shine-ir",
        export: "shineIR",
    },
    RegistryRecord {
        id: "contradiction-ir",
        title: "Contradiction IR: Opposition, Posited Contradiction, Ground",
        section: "A. ESSENCE AS REFLECTION WITHIN ITSELF - 2. The Determinations of Reflection - C. Contradiction",
        module: "@relative/essence/reflection/foundation/contradiction-ir",
        export: "contradictionIR",
    },
    RegistryRecord {
        id: "difference-ir",
        title: "Difference IR: Absolute Difference, Diversity, Opposition",
        section: "A. ESSENCE AS REFLECTION WITHIN ITSELF - 2. The Determinations of Reflection - B. Difference",
        module: "@relative/essence/reflection/foundation/difference-ir",
        export: "differenceIR",
    },
    RegistryRecord {
        id: "identity-ir",
        title: "Identity IR: Essence as Simple Self-Identity",
        section: "A. ESSENCE AS REFLECTION WITHIN ITSELF - 2. The Determinations of Reflection - A. Identity",
        module: "@relative/essence/reflection/foundation/identity-ir",
        export: "identityIR",
    },
    RegistryRecord {
        id: "absolute-ir",
        title: "Absolute Ground IR: Form, Matter, Content",
        section: "A. ESSENCE AS REFLECTION WITHIN ITSELF - 3. Ground - a. Absolute Ground",
        module: "@relative/essence/reflection/ground/absolute-ir",
        export: "absoluteIR",
    },
    RegistryRecord {
        id: "condition-ir",
        title: "Condition IR: Unconditioned, Procession, Concrete Existence",
        section: "A. ESSENCE AS REFLECTION WITHIN ITSELF - 3. Ground - c. Condition",
        module: "@relative/essence/reflection/ground/condition-ir",
        export: "conditionIR",
    },
    RegistryRecord {
        id: "determinate-ir",
        title: "Determinate Ground IR: Formal, Real, Complete, Conditioning",
        section: "A. ESSENCE AS REFLECTION WITHIN ITSELF - 3. Ground - b. Determinate Ground",
        module: "@relative/essence/reflection/ground/determinate-ir",
        export: "determinateIR",
    },
];
