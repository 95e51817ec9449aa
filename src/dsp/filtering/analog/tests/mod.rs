mod prototypes;
